//! Conversions from the gallery's output records into [`gtmpl_value::Value`]
//! objects so the template can render them.

use crate::entry::{Slide, Thumbnail};
use gtmpl_value::Value;
use std::collections::HashMap;
use url::Url;

impl From<&Thumbnail> for Value {
    fn from(thumbnail: &Thumbnail) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("index".to_owned(), Value::from(thumbnail.index as i64));
        m.insert("image".to_owned(), url_value(&thumbnail.image));
        m.insert("preview".to_owned(), (&thumbnail.preview).into());
        Value::Object(m)
    }
}

impl From<&Slide> for Value {
    fn from(slide: &Slide) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("index".to_owned(), Value::from(slide.index as i64));
        m.insert("image".to_owned(), url_value(&slide.image));
        m.insert("caption".to_owned(), (&slide.caption).into());
        m.insert(
            "link".to_owned(),
            match &slide.link {
                Some(url) => url_value(url),
                None => Value::Nil,
            },
        );
        Value::Object(m)
    }
}

fn url_value(url: &Url) -> Value {
    Value::String(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_to_value() {
        let thumbnail = Thumbnail {
            index: 2,
            image: Url::parse("https://example.org/2.png").unwrap(),
            preview: "A teaser\u{2026}".to_owned(),
        };
        match Value::from(&thumbnail) {
            Value::Object(m) => {
                assert_eq!(Some(&Value::from(2)), m.get("index"));
                assert_eq!(
                    Some(&Value::String("https://example.org/2.png".to_owned())),
                    m.get("image")
                );
                assert_eq!(
                    Some(&Value::String("A teaser\u{2026}".to_owned())),
                    m.get("preview")
                );
            }
            other => panic!("wanted an object, got {:?}", other),
        }
    }

    #[test]
    fn test_slide_without_link_is_nil() {
        let slide = Slide {
            index: 0,
            image: Url::parse("https://example.org/0.png").unwrap(),
            caption: "Caption.".to_owned(),
            link: None,
        };
        match Value::from(&slide) {
            Value::Object(m) => assert_eq!(Some(&Value::Nil), m.get("link")),
            other => panic!("wanted an object, got {:?}", other),
        }
    }
}
