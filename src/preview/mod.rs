//! PDF preview of gly documents.
//!
//! The generator writes a gabc file per score and a LaTeX document
//! including them; the builder then compiles everything with gregorio and
//! lualatex.

mod builder;

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GlyError, Result};
use crate::render::{DocumentGabcConvertor, GabcOptions};
use crate::types::{Document, Score};

pub use builder::PreviewBuilder;

/// Template used when none is given.
pub const DEFAULT_TEMPLATE: &str = include_str!("lualatex_document.tex");

/// Headers combined into the line printed above each score.
const COMMENTARY_HEADERS: [&str; 4] = ["book", "manuscript", "arranger", "author"];

#[derive(Debug, Clone, Default)]
pub struct PreviewOptions {
    /// Only generate the assets, don't compile them.
    pub no_build: bool,
    /// Write the body without the document template; implies `no_build`.
    pub no_document: bool,
    /// List all score headers above each score.
    pub full_headers: bool,
    pub output_directory: Option<PathBuf>,
}

/// Files produced by a preview run.
#[derive(Debug, Clone)]
pub struct PreviewOutput {
    pub tex: PathBuf,
    pub gabcs: Vec<PathBuf>,
    pub built: bool,
}

/// Takes a document and builds a PDF preview (or at least all the assets).
#[derive(Debug, Clone)]
pub struct PreviewGenerator {
    template: String,
    options: PreviewOptions,
    builder: PreviewBuilder,
}

impl PreviewGenerator {
    pub fn new(template: Option<String>, options: PreviewOptions) -> Self {
        let dir = options
            .output_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            template: template.unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
            options,
            builder: PreviewBuilder::new(dir),
        }
    }

    /// Replace the builder (e.g. to use other executables).
    pub fn with_builder(mut self, builder: PreviewBuilder) -> Self {
        self.builder = builder;
        self
    }

    pub fn process(&self, document: &Document) -> Result<PreviewOutput> {
        let convertor = DocumentGabcConvertor::new(
            document,
            GabcOptions {
                output_stem: None,
                output_directory: self.options.output_directory.clone(),
                suffix_always: true,
            },
        );
        let written = convertor.convert()?;

        let mut builder = self.builder.clone();
        let mut includes = Vec::with_capacity(written.len());
        for (score, path) in &written {
            let file_name = path.file_name().map(PathBuf::from).unwrap_or_else(|| path.clone());
            let gtex = file_name.with_extension("").display().to_string();
            builder.add_gabc(file_name);
            includes.push((*score, gtex));
        }

        let body = self.render_body(&includes);
        let tex_content = if self.options.no_document {
            body
        } else {
            self.fill_template(document, &body)
        };

        let tex_name = format!("{}.tex", preview_stem(document.path.as_deref()));
        let tex = self
            .options
            .output_directory
            .as_ref()
            .map_or_else(|| PathBuf::from(&tex_name), |dir| dir.join(&tex_name));
        fs::write(&tex, tex_content).map_err(|e| GlyError::Io {
            path: tex.clone(),
            message: format!("Failed to write preview document: {}", e),
        })?;

        let build = !self.options.no_build && !self.options.no_document;
        if build {
            builder.set_main_tex(tex_name);
            builder.build()?;
        }

        Ok(PreviewOutput {
            tex,
            gabcs: written.into_iter().map(|(_, path)| path).collect(),
            built: build,
        })
    }

    /// LaTeX body including every score, given (score, gtex name) pairs.
    pub fn render_body(&self, includes: &[(&Score, String)]) -> String {
        let mut out = String::new();

        for (score, gtex) in includes {
            let piece_title: Vec<&str> = COMMENTARY_HEADERS
                .iter()
                .filter_map(|key| score.headers.get(key))
                .collect();
            if !piece_title.is_empty() {
                let _ = writeln!(out, "\\commentary{{\\footnotesize{{{}}}}}", piece_title.join(", "));
            }

            if let Some(annotation) = score.headers.get("annotation") {
                let _ = writeln!(out, "\\setfirstannotation{{{}}}", annotation);
                if let Some(second) = score.headers.get("annotation2") {
                    let _ = writeln!(out, "\\setsecondannotation{{{}}}", second);
                }
            }

            if self.options.full_headers {
                for (key, value) in score.headers.iter() {
                    let _ = writeln!(out, "\\noindent{{\\small\\textbf{{{}}}: {}}}\\par", key, value);
                }
            }

            let _ = writeln!(out, "\\includescore{{{}}}\n\\vspace{{1cm}}", gtex);
        }

        out
    }

    fn fill_template(&self, document: &Document, body: &str) -> String {
        let title = document.header.get("title");
        self.template
            .replace("%{title}", title.unwrap_or(""))
            .replace("%{maketitle}", if title.is_some() { "\\maketitle" } else { "" })
            .replace("%{body}", body)
    }
}

fn preview_stem(path: Option<&Path>) -> String {
    path.and_then(Path::file_stem)
        .and_then(|s| s.to_str())
        .unwrap_or("preview")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn options(dir: &Path) -> PreviewOptions {
        PreviewOptions {
            no_build: true,
            output_directory: Some(dir.to_path_buf()),
            ..PreviewOptions::default()
        }
    }

    #[test]
    fn test_render_body() {
        let doc = Parser::new()
            .parse_str("author: Anon\nbook: LU\nannotation: Ps.\nc4 f\n")
            .unwrap();
        let score = doc.scores().next().unwrap();
        let generator = PreviewGenerator::new(None, PreviewOptions::default());

        let body = generator.render_body(&[(score, "kyrie_1".to_string())]);

        insta::assert_snapshot!(body, @r"
        \commentary{\footnotesize{LU, Anon}}
        \setfirstannotation{Ps.}
        \includescore{kyrie_1}
        \vspace{1cm}
        ");
    }

    #[test]
    fn test_full_headers() {
        let doc = Parser::new().parse_str("mode: 8\nc4 f\n").unwrap();
        let score = doc.scores().next().unwrap();
        let generator = PreviewGenerator::new(
            None,
            PreviewOptions {
                full_headers: true,
                ..PreviewOptions::default()
            },
        );

        let body = generator.render_body(&[(score, "x".to_string())]);

        assert!(body.contains("\\textbf{mode}: 8"));
    }

    #[test]
    fn test_process_writes_assets() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = Parser::new()
            .parse_str("\\header\ntitle: Kyrie\n\\score\nA -- men\nc4 f g\n")
            .unwrap();
        doc.path = Some(PathBuf::from("kyrie.gly"));

        let output = PreviewGenerator::new(None, options(dir.path()))
            .process(&doc)
            .unwrap();

        assert!(!output.built);
        assert_eq!(output.tex, dir.path().join("kyrie.tex"));
        assert_eq!(output.gabcs, vec![dir.path().join("kyrie_1.gabc")]);

        let tex = fs::read_to_string(&output.tex).unwrap();
        assert!(tex.contains("\\title{Kyrie}"));
        assert!(tex.contains("\\maketitle"));
        assert!(tex.contains("\\includescore{kyrie_1}"));
    }

    #[test]
    fn test_custom_template_and_no_document() {
        let dir = tempfile::tempdir().unwrap();
        let doc = Parser::new().parse_str("c4 f\n").unwrap();

        let generator = PreviewGenerator::new(
            Some("BEGIN %{title}|%{maketitle}|%{body}END".to_string()),
            options(dir.path()),
        );
        let output = generator.process(&doc);
        // no path and no output stem: gabc files cannot be named
        assert!(output.is_err());

        let mut doc = doc;
        doc.path = Some(PathBuf::from("x.gly"));
        let output = generator.process(&doc).unwrap();
        let tex = fs::read_to_string(&output.tex).unwrap();
        assert!(tex.starts_with("BEGIN ||\\includescore{x_1}"));

        let generator = PreviewGenerator::new(
            None,
            PreviewOptions {
                no_document: true,
                ..options(dir.path())
            },
        );
        let output = generator.process(&doc).unwrap();
        let tex = fs::read_to_string(&output.tex).unwrap();
        assert!(tex.starts_with("\\includescore{x_1}"));
        assert!(!output.built);
    }

    #[test]
    fn test_build_failure_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = Parser::new().parse_str("c4 f\n").unwrap();
        doc.path = Some(PathBuf::from("x.gly"));

        let generator = PreviewGenerator::new(
            None,
            PreviewOptions {
                output_directory: Some(dir.path().to_path_buf()),
                ..PreviewOptions::default()
            },
        )
        .with_builder(
            PreviewBuilder::new(dir.path()).with_programs("gly-test-no-gregorio", "gly-test-no-lualatex"),
        );

        assert!(matches!(generator.process(&doc), Err(GlyError::Build { .. })));
    }
}
