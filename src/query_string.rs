use std::collections::HashMap;

#[derive(PartialEq, Debug)]
pub struct QueryString {
    items: HashMap<String, String>,
}

impl QueryString {
    pub fn from(buf: &str) -> Self {
        let vs: Vec<(String, String)> = serde_urlencoded::from_str(buf).unwrap_or_default();
        let items: HashMap<String, String> = vs.into_iter().collect();

        QueryString {
            items,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// `page` parameter, 1 when absent or not a positive number
    pub fn get_page(&self) -> u32 {
        self.get("page")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_page() {
        assert_eq!(QueryString::from("page=3").get_page(), 3);
        assert_eq!(QueryString::from("tag=rust&page=2").get_page(), 2);
        assert_eq!(QueryString::from("page=0").get_page(), 1);
        assert_eq!(QueryString::from("page=-4").get_page(), 1);
        assert_eq!(QueryString::from("page=abc").get_page(), 1);
        assert_eq!(QueryString::from("").get_page(), 1);
    }

    #[test]
    fn test_parse_query_str() {
        let buf = "bread=baguette&cheese=comt%C3%A9&meat=ham";
        let qs = QueryString::from(buf);
        assert_eq!(qs.get("bread"), Some("baguette"));
        assert_eq!(qs.get("cheese"), Some("comté"));
        assert_eq!(qs.get("fat"), None);
    }

    #[test]
    fn test_parse_key_only_query_str() {
        let expected: HashMap<String, String> = vec![("key-only".to_string(), "".to_string())].into_iter().collect();
        assert_eq!(QueryString::from("key-only"), QueryString { items: expected });
    }
}
