use super::gif_provider::Gif;
use serde::Deserialize;

/// Body of `GET /v1/gifs/random`
///
/// Only the fields the bot reads are modelled; everything else is ignored.
#[derive(Debug, Deserialize)]
pub struct RandomResponse {
    pub data: GifObject,
}

/// Body of `GET /v1/gifs/search`
///
/// `data` may be missing or `null`, which is treated the same as an empty list.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Option<Vec<GifObject>>,
}

#[derive(Debug, Deserialize)]
pub struct GifObject {
    pub images: Images,
}

#[derive(Debug, Deserialize)]
pub struct Images {
    pub original: Rendition,
}

#[derive(Debug, Deserialize)]
pub struct Rendition {
    pub url: String,
}

impl From<GifObject> for Gif {
    fn from(object: GifObject) -> Self {
        Gif::new(object.images.original.url)
    }
}

impl SearchResponse {
    pub fn into_gifs(self) -> Vec<Gif> {
        self.data
            .unwrap_or_default()
            .into_iter()
            .map(Gif::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_random_response() {
        let json = r#"{
            "data": {
                "type": "gif",
                "id": "abc123",
                "images": {
                    "original": {"url": "https://x/a.gif", "width": "480"},
                    "fixed_height": {"url": "https://x/a-200.gif"}
                }
            },
            "meta": {"status": 200, "msg": "OK"}
        }"#;

        let response: RandomResponse = serde_json::from_str(json).unwrap();
        assert_eq!(Gif::from(response.data), Gif::new("https://x/a.gif"));
    }

    #[test]
    fn test_parse_random_response_without_result_fails() {
        // Giphy answers an unmatched random request with an empty array
        let json = r#"{"data": [], "meta": {"status": 200}}"#;
        assert!(serde_json::from_str::<RandomResponse>(json).is_err());
    }

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "data": [
                {"images": {"original": {"url": "https://x/1.gif"}}},
                {"images": {"original": {"url": "https://x/2.gif"}}}
            ],
            "pagination": {"total_count": 2, "count": 2, "offset": 0}
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.into_gifs(),
            vec![Gif::new("https://x/1.gif"), Gif::new("https://x/2.gif")]
        );
    }

    #[rstest]
    #[case::empty_list(r#"{"data": []}"#)]
    #[case::null_data(r#"{"data": null}"#)]
    #[case::missing_data(r#"{"meta": {"status": 200}}"#)]
    fn test_parse_search_response_without_results(#[case] json: &str) {
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.into_gifs().is_empty());
    }

    #[test]
    fn test_parse_search_result_missing_url_fails() {
        let json = r#"{"data": [{"images": {"original": {}}}]}"#;
        assert!(serde_json::from_str::<SearchResponse>(json).is_err());
    }
}
