use std::io::BufRead;

use polyfuse_runtime::MAX_LINE_LEN;

use crate::error::ParseError;
use crate::run::{Entry, Run};

const FIELD_COUNT: usize = 6;

/// Read a whitespace-separated TREC run file: `qid iter docno rank score system`.
///
/// The `iter` column is ignored and the file's own `rank` column is
/// discarded — ranks are re-numbered here by counting entries within each
/// topic, resetting on topic change, matching `trec_read`/`parse_line` in
/// the original implementation. Topics are assumed sorted together in the
/// file; a topic reappearing after another topic has started is treated
/// as a second, distinct occurrence with its own rank sequence.
pub fn read_run<R: BufRead>(mut reader: R) -> Result<Run, ParseError> {
    let mut run = Run::default();
    let mut prev_qid: Option<i32> = None;
    let mut rank = 0usize;
    let mut line_no = 0usize;
    let mut buf = String::new();

    loop {
        buf.clear();
        let bytes_read = reader.read_line(&mut buf)?;
        if bytes_read == 0 {
            break;
        }
        line_no += 1;

        if buf.as_bytes().len() > MAX_LINE_LEN {
            return Err(ParseError::LineTooLong { line: line_no });
        }

        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }

        let fields: Vec<&str> = buf.split_whitespace().collect();
        if fields.len() != FIELD_COUNT {
            return Err(ParseError::WrongFieldCount {
                line: line_no,
                found: fields.len(),
                expected: FIELD_COUNT,
            });
        }

        let qid: i32 = fields[0]
            .parse()
            .map_err(|_| ParseError::InvalidQid { line: line_no })?;
        let docno = fields[2].to_string();
        let score: f64 = fields[4]
            .parse()
            .map_err(|_| ParseError::InvalidScore { line: line_no })?;
        let system_name = fields[5].to_string();

        if prev_qid != Some(qid) {
            rank = 0;
            run.topics.push(qid);
            prev_qid = Some(qid);
        }
        rank += 1;
        run.max_rank = run.max_rank.max(rank);

        run.entries.push(Entry {
            qid,
            docno,
            rank,
            score,
            system_name,
        });
    }

    Ok(run)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
