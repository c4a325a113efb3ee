//! Numbering cliques and writing them out as JSON lines.

use std::io::{BufWriter, Write};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;
use crate::filter::Corpus;

/// One clique by position in the output, with its words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRecord<'a> {
    pub position: usize,
    pub words: Vec<&'a str>,
}

/// Serialized as `{"<position>": ["word", ...]}`.
impl Serialize for ResultRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.position.to_string(), &self.words)?;
        map.end()
    }
}

/// Maps vertex cliques to numbered [`ResultRecord`]s, one at a time.
pub struct Records<'a, I> {
    corpus: &'a Corpus,
    cliques: I,
    position: usize,
}

impl<'a, I> Records<'a, I>
where
    I: Iterator<Item = Vec<usize>>,
{
    pub fn new(corpus: &'a Corpus, cliques: I) -> Self {
        Records {
            corpus,
            cliques,
            position: 0,
        }
    }
}

impl<'a, I> Iterator for Records<'a, I>
where
    I: Iterator<Item = Vec<usize>>,
{
    type Item = ResultRecord<'a>;

    fn next(&mut self) -> Option<ResultRecord<'a>> {
        let clique = self.cliques.next()?;
        let corpus = self.corpus;
        let record = ResultRecord {
            position: self.position,
            words: clique.into_iter().map(|v| corpus.word(v)).collect(),
        };
        self.position += 1;
        Some(record)
    }
}

/// Writes one JSON object per line.
pub struct RecordWriter<W: Write> {
    out: BufWriter<W>,
    written: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W) -> Self {
        RecordWriter {
            out: BufWriter::new(out),
            written: 0,
        }
    }

    pub fn write(&mut self, record: &ResultRecord<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Write records until the iterator ends or `limit` records have gone out.
    pub fn write_all<'a>(
        &mut self,
        records: impl IntoIterator<Item = ResultRecord<'a>>,
        limit: Option<usize>,
    ) -> Result<usize> {
        let before = self.written;
        for record in records.into_iter().take(limit.unwrap_or(usize::MAX)) {
            self.write(&record)?;
        }
        Ok(self.written - before)
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.out.into_inner().map_err(|e| e.into_error().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::candidate_corpus;
    use crate::letters::Alphabet;

    #[test]
    fn record_shape() {
        let record = ResultRecord {
            position: 7,
            words: vec!["fjord", "waltz"],
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"7":["fjord","waltz"]}"#
        );
    }

    #[test]
    fn records_are_numbered_in_arrival_order() {
        let corpus = candidate_corpus(["fjord", "gucks", "nymph"], 5, &Alphabet::english());
        let cliques = vec![vec![2], vec![0, 1]];
        let records: Vec<_> = Records::new(&corpus, cliques.into_iter()).collect();
        assert_eq!(
            records,
            [
                ResultRecord {
                    position: 0,
                    words: vec!["nymph"]
                },
                ResultRecord {
                    position: 1,
                    words: vec!["fjord", "gucks"]
                },
            ]
        );
    }

    #[test]
    fn writes_one_line_per_record() {
        let corpus = candidate_corpus(["fjord", "gucks", "nymph"], 5, &Alphabet::english());
        let cliques = vec![vec![0, 1], vec![0, 2], vec![1, 2]];
        let mut writer = RecordWriter::new(Vec::new());
        let n = writer
            .write_all(Records::new(&corpus, cliques.into_iter()), None)
            .unwrap();
        assert_eq!(n, 3);
        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(
            text,
            "{\"0\":[\"fjord\",\"gucks\"]}\n{\"1\":[\"fjord\",\"nymph\"]}\n{\"2\":[\"gucks\",\"nymph\"]}\n"
        );
    }

    #[test]
    fn limit_caps_output() {
        let corpus = candidate_corpus(["fjord", "gucks", "nymph"], 5, &Alphabet::english());
        let mut pulled = 0;
        let cliques = (0..3).map(|v| {
            pulled += 1;
            vec![v]
        });
        let mut writer = RecordWriter::new(Vec::new());
        let n = writer
            .write_all(Records::new(&corpus, cliques), Some(2))
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(writer.written(), 2);
        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert_eq!(pulled, 2);
    }
}
