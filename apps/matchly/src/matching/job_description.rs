//! Resolves `--job-description` into text: existing file path, literal text,
//! or an interactive prompt when the argument is absent.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::{JobDescription, JobDescriptionSource};

pub const INTERACTIVE_PROMPT: &str = "Please enter the job description: ";

pub fn resolve_job_description<R: BufRead, W: Write>(
    arg: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> Result<JobDescription, AppError> {
    let Some(arg) = arg.filter(|a| !a.is_empty()) else {
        return read_interactive(input, out);
    };

    let path = Path::new(arg);
    if path.is_file() {
        debug!("Reading job description from {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| AppError::JobDescription {
            origin: path.display().to_string(),
            source,
        })?;
        return Ok(JobDescription {
            text,
            source: JobDescriptionSource::File(path.to_path_buf()),
        });
    }

    Ok(JobDescription {
        text: arg.to_string(),
        source: JobDescriptionSource::Literal,
    })
}

fn read_interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<JobDescription, AppError> {
    write!(out, "{INTERACTIVE_PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|source| AppError::JobDescription {
            origin: "stdin".to_string(),
            source,
        })?;
    if read == 0 {
        return Err(AppError::JobDescription {
            origin: "stdin".to_string(),
            source: std::io::ErrorKind::UnexpectedEof.into(),
        });
    }

    Ok(JobDescription {
        text: line.trim_end_matches(['\r', '\n']).to_string(),
        source: JobDescriptionSource::Interactive,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_literal_text_passes_through() {
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let jd = resolve_job_description(
            Some("Backend engineer, 5+ years Rust"),
            &mut input,
            &mut out,
        )
        .unwrap();

        assert_eq!(jd.text, "Backend engineer, 5+ years Rust");
        assert_eq!(jd.source, JobDescriptionSource::Literal);
        assert!(out.is_empty());
    }

    #[test]
    fn test_existing_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jd.txt");
        std::fs::write(&path, "Data engineer\nSpark, Airflow\n").unwrap();

        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let jd =
            resolve_job_description(path.to_str(), &mut input, &mut out).unwrap();

        assert_eq!(jd.text, "Data engineer\nSpark, Airflow\n");
        assert_eq!(jd.source, JobDescriptionSource::File(path));
    }

    #[test]
    fn test_directory_path_is_treated_as_literal() {
        let dir = tempfile::tempdir().unwrap();
        let arg = dir.path().to_str().unwrap().to_string();

        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let jd = resolve_job_description(Some(&arg), &mut input, &mut out).unwrap();

        assert_eq!(jd.text, arg);
        assert_eq!(jd.source, JobDescriptionSource::Literal);
    }

    #[test]
    fn test_absent_argument_prompts_and_reads_one_line() {
        let mut input = Cursor::new(b"Frontend developer, React\nsecond line\n".to_vec());
        let mut out = Vec::new();
        let jd = resolve_job_description(None, &mut input, &mut out).unwrap();

        assert_eq!(jd.text, "Frontend developer, React");
        assert_eq!(jd.source, JobDescriptionSource::Interactive);
        assert_eq!(String::from_utf8(out).unwrap(), INTERACTIVE_PROMPT);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let err = resolve_job_description(None, &mut input, &mut out).unwrap_err();

        match err {
            AppError::JobDescription { origin, source } => {
                assert_eq!(origin, "stdin");
                assert_eq!(source.kind(), std::io::ErrorKind::UnexpectedEof);
            }
            other => panic!("expected JobDescription error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_line_is_an_empty_description() {
        let mut input = Cursor::new(b"\n".to_vec());
        let mut out = Vec::new();
        let jd = resolve_job_description(None, &mut input, &mut out).unwrap();
        assert_eq!(jd.text, "");
    }

    #[test]
    fn test_empty_argument_falls_back_to_prompt() {
        let mut input = Cursor::new(b"QA lead\r\n".to_vec());
        let mut out = Vec::new();
        let jd = resolve_job_description(Some(""), &mut input, &mut out).unwrap();

        assert_eq!(jd.text, "QA lead");
        assert_eq!(jd.source, JobDescriptionSource::Interactive);
    }
}
