//! End-to-end checks over the fixture files: parse, convert, list.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use gly::{
    document_to_gly, DocumentGabcConvertor, GabcOptions, ListFormat, Lister, Parser, Unit,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_parse_mass() {
    let doc = Parser::new().parse(fixture("mass.gly")).unwrap();

    assert_eq!(doc.header.get("title"), Some("Missa de Angelis"));
    assert_eq!(doc.header.get("composer"), Some("anonymous"));

    let kinds: Vec<&str> = doc
        .content()
        .iter()
        .map(|unit| match unit {
            Unit::Score(_) => "score",
            Unit::Markup(_) => "markup",
        })
        .collect();
    assert_eq!(kinds, vec!["score", "markup", "score", "score"]);

    let kyrie = doc.score_by_id("kyrie").unwrap();
    assert_eq!(kyrie.headers.get("name"), Some("Kyrie"));
    assert!(kyrie.lyrics.is_empty());
    assert_eq!(
        kyrie.music,
        vec!["(c3)", "KY(hg)RI(hi)E(h)", "(,)", "*e(ixhi)le(gf)i(hi)son(hg)", "(::)"]
    );

    let gloria = doc.score_by_id("gloria").unwrap();
    assert_eq!(gloria.readable_lyrics(), "Gloria in excelsis Deo");
    assert_eq!(gloria.music.len(), 9);

    let sanctus = doc.score_by_id("sanctus").unwrap();
    assert_eq!(sanctus.music, vec!["c4", "g", "fe"]);
    assert_eq!(sanctus.readable_lyrics(), "Sanctus");

    let markup = doc.markups().next().unwrap();
    assert_eq!(markup.text(), "Repeat three times.");
}

#[test]
fn test_convert_mass_to_gabc() {
    let doc = Parser::new().parse(fixture("mass.gly")).unwrap();
    let out = tempdir().unwrap();

    let options = GabcOptions {
        output_directory: Some(out.path().join("gabc")),
        ..GabcOptions::default()
    };
    let written = DocumentGabcConvertor::new(&doc, options).convert().unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|(_, path)| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["mass_kyrie.gabc", "mass_gloria.gabc", "mass_sanctus.gabc"]
    );

    let gloria = fs::read_to_string(out.path().join("gabc").join("mass_gloria.gabc")).unwrap();
    assert_eq!(
        gloria,
        "name: Gloria in excelsis Deo;\n\
         id: gloria;\n\
         %%\n\
         (c4) Glo(g)ri(gh)a(h) in(h) ex(hg)cel(h)sis(ih) De(h)o()\n"
    );
}

#[test]
fn test_formatted_mass_reparses_identically() {
    let parser = Parser::new();
    let doc = parser.parse(fixture("mass.gly")).unwrap();

    let formatted = document_to_gly(&doc, parser.separator());
    let mut reparsed = parser.parse_str(&formatted).unwrap();
    reparsed.path = doc.path.clone();

    assert_eq!(reparsed, doc);
}

#[test]
fn test_list_mass_grep() {
    let mut lister = Lister::new(vec![fixture("mass.gly")], ListFormat::Grep, Parser::new());
    let mut out = Vec::new();
    let mut err = Vec::new();

    lister.list(&mut out, &mut err).unwrap();

    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].ends_with("mass.gly:2:Gloria in excelsis Deo"));
    assert!(!lister.has_errors());
    assert!(err.is_empty());
}
