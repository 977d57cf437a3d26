use std::io::{BufRead, Write};

use super::{AHA_MOMENTS, QUESTIONS, TOPIC, WHAT_I_KNOW};
use crate::entry::EntryFields;
use crate::error::Result;

/// Answer that empties a pre-filled field
const CLEAR: &str = "-";

/// Line that ends a text area
const END: &str = ".";

/// Line-oriented form widgets over any reader/writer pair.
///
/// Every widget returns `Ok(None)` when input hits EOF, which callers treat as
/// abandoning the current form.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Print `label: ` and read one line
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Single-line field. With `current`, an empty answer keeps it and `-` clears it.
    pub fn text_input(&mut self, label: &str, current: Option<&str>) -> Result<Option<String>> {
        let answer = match current {
            Some(value) => self.prompt(&format!("{} [{}]", label, value))?,
            None => self.prompt(label)?,
        };
        Ok(answer.map(|a| prefilled(a, current)))
    }

    /// Multi-line field terminated by a lone `.` or EOF. Blank lines inside the
    /// text are kept; leading and trailing ones are dropped.
    pub fn text_area(&mut self, label: &str, current: Option<&str>) -> Result<Option<String>> {
        writeln!(self.output, "{} (finish with a line containing only '{}')", label, END)?;
        if let Some(value) = current {
            for line in value.lines() {
                writeln!(self.output, "  | {}", line)?;
            }
            writeln!(
                self.output,
                "  (a lone '{}' keeps this, '{}' clears it)",
                END, CLEAR
            )?;
        }
        self.output.flush()?;

        let mut lines = Vec::new();
        loop {
            match self.read_line()? {
                Some(line) if line.trim_end() == END => break,
                Some(line) => lines.push(line),
                None if lines.is_empty() => return Ok(None),
                None => break,
            }
        }

        let text = lines.join("\n");
        Ok(Some(prefilled(text.trim_matches('\n').to_string(), current)))
    }

    /// Pick one of `ids`. An empty answer picks the first, anything unlisted re-prompts.
    pub fn select_id(&mut self, label: &str, ids: &[i64]) -> Result<Option<i64>> {
        let Some(&first) = ids.first() else {
            return Ok(None);
        };
        let listed = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        loop {
            let Some(answer) = self.prompt(&format!("{} ({}) [{}]", label, listed, first))? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(Some(first));
            }
            match answer.parse::<i64>() {
                Ok(id) if ids.contains(&id) => return Ok(Some(id)),
                _ => writeln!(self.output, "'{}' is not one of the listed entries", answer)?,
            }
        }
    }

    pub fn confirm(&mut self, question: &str) -> Result<Option<bool>> {
        let answer = self.prompt(&format!("{} [y/N]", question))?;
        Ok(answer.map(|a| {
            let a = a.trim();
            a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes")
        }))
    }

    /// The four-field entry form, optionally pre-filled for editing
    pub fn entry_form(&mut self, current: Option<&EntryFields>) -> Result<Option<EntryFields>> {
        let Some(topic) = self.text_input(TOPIC, current.map(|c| c.topic.as_str()))? else {
            return Ok(None);
        };
        let Some(what_i_know) =
            self.text_area(WHAT_I_KNOW, current.map(|c| c.what_i_know.as_str()))?
        else {
            return Ok(None);
        };
        let Some(questions) = self.text_area(QUESTIONS, current.map(|c| c.questions.as_str()))?
        else {
            return Ok(None);
        };
        let Some(aha_moments) =
            self.text_area(AHA_MOMENTS, current.map(|c| c.aha_moments.as_str()))?
        else {
            return Ok(None);
        };

        Ok(Some(EntryFields {
            topic,
            what_i_know,
            questions,
            aha_moments,
        }))
    }
}

fn prefilled(answer: String, current: Option<&str>) -> String {
    match current {
        Some(value) if answer.is_empty() => value.to_string(),
        Some(_) if answer.trim() == CLEAR => String::new(),
        _ => answer,
    }
}
