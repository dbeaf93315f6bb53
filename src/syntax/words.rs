use std::{collections::BTreeSet, fmt};

use serde::{
    de::{SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// The words of one category. Written out the way the engine expects them,
/// as a single space-separated string.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct Words(BTreeSet<String>);

impl Words {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> Extend<&'a str> for Words {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(str::to_string));
    }
}

impl<'a> FromIterator<&'a str> for Words {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut words = Self::default();
        words.extend(iter);
        words
    }
}

impl Serialize for Words {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut joined = String::new();

        for word in self.iter() {
            if !joined.is_empty() {
                joined.push(' ');
            }

            joined.push_str(word);
        }

        serializer.serialize_str(&joined)
    }
}

struct WordsVisitor;

impl<'de> Visitor<'de> for WordsVisitor {
    type Value = Words;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a space-separated string or a list of words")
    }

    fn visit_str<E>(self, value: &str) -> Result<Words, E>
    where
        E: serde::de::Error,
    {
        Ok(value.split_whitespace().collect())
    }

    fn visit_seq<T>(self, mut access: T) -> Result<Words, T::Error>
    where
        T: SeqAccess<'de>,
    {
        let mut words = Words::default();

        while let Some(word) = access.next_element::<String>()? {
            words.extend(word.split_whitespace());
        }

        Ok(words)
    }
}

impl<'de> Deserialize<'de> for Words {
    fn deserialize<D>(deserializer: D) -> Result<Words, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(WordsVisitor)
    }
}
