use folio_core::{ResumeData, ResumeError};
use folio_server::assemble::{render, wrap};
use folio_server::pdf::{text_width, Font};
use folio_server::routes::{handle, GENERATE_FAILED, RESUME_PATH};
use folio_server::{AssembleError, FileSource, ResumeSource, SourceError, StaticSource};
use tiny_http::Method;

struct FailingSource;

impl ResumeSource for FailingSource {
    fn load(&self) -> Result<ResumeData, SourceError> {
        Err(SourceError::Unavailable("forced failure".into()))
    }
}

struct FixedSource(ResumeData);

impl ResumeSource for FixedSource {
    fn load(&self) -> Result<ResumeData, SourceError> {
        Ok(self.0.clone())
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn post_returns_pdf_attachment() {
    let reply = handle(&Method::Post, RESUME_PATH, &StaticSource);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.header("content-type"), Some("application/pdf"));
    assert_eq!(
        reply.header("Content-Disposition"),
        Some("attachment; filename=\"Resume_Riddhiman_Raut.pdf\"")
    );
    assert!(!reply.body.is_empty());
    assert!(reply.body.starts_with(b"%PDF-"));
    assert!(contains(&reply.body, b"%%EOF"));
}

#[test]
fn get_is_an_alias_for_post() {
    let post = handle(&Method::Post, RESUME_PATH, &StaticSource);
    let get = handle(&Method::Get, RESUME_PATH, &StaticSource);
    assert_eq!(get.status, 200);
    assert_eq!(post.body, get.body);
}

#[test]
fn query_string_is_ignored() {
    let reply = handle(&Method::Get, "/api/generate-resume?x=1", &StaticSource);
    assert_eq!(reply.status, 200);
}

#[test]
fn failing_source_yields_fixed_json_error() {
    let reply = handle(&Method::Post, RESUME_PATH, &FailingSource);
    assert_eq!(reply.status, 500);
    assert_eq!(reply.header("Content-Type"), Some("application/json"));
    assert_eq!(reply.body, br#"{"error":"Failed to generate resume"}"#.to_vec());
    let parsed: serde_json::Value = serde_json::from_slice(&reply.body).unwrap();
    assert_eq!(parsed["error"], GENERATE_FAILED);
}

#[test]
fn invalid_data_yields_500() {
    let mut data = folio_core::content::resume_data();
    data.email.clear();
    let reply = handle(&Method::Post, RESUME_PATH, &FixedSource(data));
    assert_eq!(reply.status, 500);
}

#[test]
fn unknown_path_is_404_and_other_methods_405() {
    assert_eq!(handle(&Method::Get, "/", &StaticSource).status, 404);
    assert_eq!(handle(&Method::Post, "/api/other", &StaticSource).status, 404);
    let put = handle(&Method::Put, RESUME_PATH, &StaticSource);
    assert_eq!(put.status, 405);
    assert_eq!(put.header("Allow"), Some("GET, POST"));
}

#[test]
fn output_is_byte_identical_for_identical_input() {
    let data = folio_core::content::resume_data();
    let a = render(&data).unwrap();
    let b = render(&data.clone()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn links_become_uri_annotations() {
    let data = folio_core::content::resume_data();
    let bytes = render(&data).unwrap();
    assert!(contains(&bytes, b"/Subtype /Link"));
    assert!(contains(&bytes, b"(https://arxiv.org/abs/2509.04463)"));
    assert!(contains(&bytes, b"/BaseFont /Times-Bold"));
    assert!(contains(&bytes, b"(RIDDHIMAN RAUT)"));
}

#[test]
fn section_order_is_fixed() {
    let bytes = render(&folio_core::content::resume_data()).unwrap();
    let text = String::from_utf8_lossy(&bytes);
    let order = [
        "(SUMMARY)",
        "(EDUCATION)",
        "(EXPERIENCE)",
        "(RESEARCH & PROJECTS)",
        "(SKILLS)",
        "(LEADERSHIP & TEACHING)",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|s| text.find(s).unwrap_or_else(|| panic!("missing {}", s)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
}

#[test]
fn overflow_is_dropped_not_an_error() {
    let mut data = folio_core::content::resume_data();
    let long = "word ".repeat(400);
    for exp in &mut data.experience {
        exp.bullets = vec![long.clone(); 10];
    }
    let bytes = render(&data).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn render_rejects_incomplete_entries() {
    let mut data = folio_core::content::resume_data();
    data.projects[1].title = "  ".into();
    match render(&data) {
        Err(AssembleError::Invalid(ResumeError::IncompleteEntry { section, index, field })) => {
            assert_eq!((section, index, field), ("projects", 1, "title"));
        }
        other => panic!("unexpected {:?}", other.map(|b| b.len())),
    }
}

#[test]
fn wrap_respects_width() {
    let text = "Improved rollout stability in autoregressive surrogates by 40% for reliable long-horizon predictions";
    let lines = wrap(text, Font::Roman, 10.5, 200.0, 200.0);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(text_width(line, Font::Roman, 10.5, 0.0) <= 200.0, "{}", line);
    }
    assert_eq!(lines.join(" "), text);
}

#[test]
fn file_source_reads_json_and_reports_errors() {
    let dir = std::env::temp_dir().join(format!("folio-server-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("resume.json");
    let data = folio_core::content::resume_data();
    std::fs::write(&good, serde_json::to_string(&data).unwrap()).unwrap();
    assert_eq!(FileSource::new(&good).load().unwrap(), data);

    let bad = dir.join("broken.json");
    std::fs::write(&bad, "{ not json").unwrap();
    assert!(matches!(FileSource::new(&bad).load(), Err(SourceError::Parse { .. })));

    let missing = dir.join("missing.json");
    assert!(matches!(FileSource::new(&missing).load(), Err(SourceError::Read { .. })));
    let reply = handle(&Method::Post, RESUME_PATH, &FileSource::new(&missing));
    assert_eq!(reply.status, 500);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn json_fields_are_camel_case_and_optional_sections_may_be_absent() {
    let json = r#"{
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "location": "London",
        "linkedinUrl": "",
        "githubUrl": "",
        "summary": "Analyst.",
        "education": [],
        "experience": [{
            "company": "Engine Co",
            "role": "Programmer",
            "period": "1843",
            "location": "London",
            "bullets": ["Wrote the first program"]
        }],
        "projects": [],
        "skills": { "programming": [], "ml": [], "hpc": [], "simulation": [] }
    }"#;
    let data: ResumeData = serde_json::from_str(json).unwrap();
    assert_eq!(data.work_email, "");
    assert_eq!(data.leadership, None);
    assert_eq!(data.experience[0].tools, None);
    assert_eq!(data.download_filename(), "Resume_Ada_Lovelace.pdf");

    let reply = handle(&Method::Post, RESUME_PATH, &FixedSource(data));
    assert_eq!(reply.status, 200);
    assert_eq!(
        reply.header("content-disposition"),
        Some("attachment; filename=\"Resume_Ada_Lovelace.pdf\"")
    );

    let out = serde_json::to_string(&resume_data_with_scholar()).unwrap();
    assert!(out.contains("\"googleScholarUrl\""));
    assert!(!out.contains("google_scholar_url"));
}

fn resume_data_with_scholar() -> ResumeData {
    ResumeData {
        google_scholar_url: "https://scholar.example".into(),
        ..folio_core::content::resume_data()
    }
}

fn named(name: &str) -> ResumeData {
    ResumeData {
        name: name.into(),
        ..folio_core::content::resume_data()
    }
}

fn sendable(reply: &folio_server::Reply, name: &str) -> bool {
    let value = reply.header(name).unwrap_or_default();
    tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()).is_ok()
}

#[test]
fn non_ascii_names_keep_the_attachment_header() {
    let reply = handle(&Method::Post, RESUME_PATH, &FixedSource(named("José García")));
    assert_eq!(reply.status, 200);
    let value = reply.header("Content-Disposition").unwrap();
    assert!(value.starts_with("attachment; filename=\"Resume_Jos__Garc_a.pdf\""));
    assert!(value.contains("filename*=UTF-8''Resume_Jos%C3%A9_Garc%C3%ADa.pdf"));
    assert!(sendable(&reply, "Content-Disposition"));
    assert_eq!(
        folio_core::disposition_filename(value).as_deref(),
        Some("Resume_José_García.pdf")
    );
}

#[test]
fn quotes_in_names_are_escaped_out_of_the_header() {
    let reply = handle(&Method::Post, RESUME_PATH, &FixedSource(named("Ann \"AJ\" Lee")));
    assert_eq!(reply.status, 200);
    let value = reply.header("Content-Disposition").unwrap();
    // exactly one quoted string, no stray quotes inside it
    assert_eq!(value.matches('"').count(), 2);
    assert!(sendable(&reply, "Content-Disposition"));
    assert_eq!(
        folio_core::disposition_filename(value).as_deref(),
        Some("Resume_Ann_\"AJ\"_Lee.pdf")
    );
}
