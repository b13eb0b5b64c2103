//! Generator: fqname list → registry → compatibility matrix document
use crate::config::{is_stdio, GeneratorConfig};
use crate::error::FcmError;
use crate::report::{KindCounts, RunReport};
use fcm_out::render_matrix;
use fcm_registry::{CompatMatrix, Diagnostics, MergeOutcome};
use hal_fqname::parse_fqname;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Result of one in-memory pass.
#[derive(Debug, Clone)]
pub struct Generated {
    pub matrix: CompatMatrix,
    pub document: String,
    pub report: RunReport,
}

pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Parses and registers every line of `source`.
    ///
    /// A malformed line aborts the pass unless `skip_invalid` is set; a kind
    /// conflict only aborts it when `strict_conflicts` is set.
    pub fn build_matrix(
        &self,
        source: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<(CompatMatrix, RunReport), FcmError> {
        let mut matrix = CompatMatrix::new();
        let mut report = RunReport::default();

        for (idx, raw) in source.lines().enumerate() {
            let line_no = idx + 1;
            report.lines_read += 1;

            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                report.lines_ignored += 1;
                continue;
            }

            let entry = match parse_fqname(line) {
                Ok(entry) => entry,
                Err(err) if self.config.skip_invalid => {
                    diagnostics.invalid_line(line_no, line, &err);
                    report.lines_skipped += 1;
                    continue;
                }
                Err(source) => {
                    return Err(FcmError::Parse {
                        line: line_no,
                        text: line.to_string(),
                        source,
                    })
                }
            };

            let name = entry.name.clone();
            match matrix.register(entry, diagnostics) {
                MergeOutcome::Conflict(conflict) if self.config.strict_conflicts => {
                    return Err(conflict.into());
                }
                MergeOutcome::Conflict(conflict) => report.conflicts.push(conflict),
                outcome => debug!(line = line_no, hal = %name, ?outcome, "registered"),
            }
        }

        report.entries = matrix.len();
        report.kinds = KindCounts::tally(&matrix);
        Ok((matrix, report))
    }

    /// Builds the matrix and renders the document, without touching the filesystem.
    pub fn generate(
        &self,
        source: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<Generated, FcmError> {
        let (matrix, report) = self.build_matrix(source, diagnostics)?;
        let document = render_matrix(&matrix, diagnostics);
        Ok(Generated {
            matrix,
            document,
            report,
        })
    }

    /// Full pass: read input, generate, write the document and the optional report.
    /// Nothing is written unless the whole input was processed.
    pub fn run(&self, diagnostics: &mut dyn Diagnostics) -> Result<RunReport, FcmError> {
        let source = read_input(&self.config.input)?;
        let Generated {
            document,
            mut report,
            ..
        } = self.generate(&source, diagnostics)?;

        write_output(&self.config.output, &document)?;
        report.output = Some(self.config.output.clone());

        if let Some(path) = &self.config.report {
            let json = report.to_json()?;
            std::fs::write(path, json + "\n").map_err(|e| FcmError::io(path, e))?;
        }

        diagnostics.notice(&format!(
            "Output written to {}",
            self.config.output.display()
        ));
        Ok(report)
    }
}

fn read_input(path: &Path) -> Result<String, FcmError> {
    if is_stdio(path) {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| FcmError::io("<stdin>", e))?;
        return Ok(source);
    }
    std::fs::read_to_string(path).map_err(|e| FcmError::io(path, e))
}

fn write_output(path: &Path, document: &str) -> Result<(), FcmError> {
    if is_stdio(path) {
        let mut stdout = std::io::stdout().lock();
        return stdout
            .write_all(document.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| FcmError::io("<stdout>", e));
    }
    std::fs::write(path, document).map_err(|e| FcmError::io(path, e))
}
