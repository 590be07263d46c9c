use std::path::{Path, PathBuf};

/// Render one `<paper>` element for a test export
pub fn paper_xml(id: &str, accepted: Option<&str>, session: &str, position: &str, authors: &[&str]) -> String {
    let accepted = accepted
        .map(|flag| format!("<isAccepted>{flag}</isAccepted>"))
        .unwrap_or_default();
    let authors: String = authors
        .iter()
        .map(|name| format!("<author><name>{name}</name></author>"))
        .collect();

    format!(
        "<paper>\
            <id>{id}</id>\
            <title>Paper {id}</title>\
            <pathInProceedings>papers/{id}.pdf</pathInProceedings>\
            <doi>10.1000/{id}</doi>\
            {accepted}\
            <positionInSession>{position}</positionInSession>\
            <authors>{authors}</authors>\
            <session><shortTitle>{session}</shortTitle></session>\
        </paper>"
    )
}

/// Wrap paper elements in the export root
pub fn papers_xml(papers: &[String]) -> String {
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<papers>{}</papers>", papers.concat())
}

/// P1 (S1, position 2), P2 (S1, position 1), P3 rejected
pub fn three_paper_export() -> String {
    papers_xml(&[
        paper_xml("P1", Some("true"), "S1", "2", &["Alice"]),
        paper_xml("P2", Some("true"), "S1", "1", &["Bob", "Carol"]),
        paper_xml("P3", Some("false"), "S1", "3", &["Dave"]),
    ])
}

/// Write `xml` as the input file inside `dir`
pub fn write_input(dir: &Path, xml: &str) -> PathBuf {
    let path = dir.join("submissions.xml");
    std::fs::write(&path, xml).expect("Failed to write test input");
    path
}

/// Sorted names of the files directly inside `dir`
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
