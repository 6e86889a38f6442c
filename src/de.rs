pub mod etag {
    use serde::de::{Error, Visitor};
    use serde::Deserializer;
    use std::fmt::{self, Formatter};

    // synapse 1.15.1 and older send `etag` as a JSON integer instead of a
    // string; accept both and keep the string form. A string etag is kept
    // as-is, without the surrounding quotes a re-serialization of the JSON
    // value would add.
    struct EtagVisitor;

    impl<'de> Visitor<'de> for EtagVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
            write!(formatter, "a string or an integer")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(v.to_string())
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(v.to_string())
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(v.to_string())
        }
    }

    pub fn deserialize<'de, D>(de: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        de.deserialize_any(EtagVisitor)
    }
}
