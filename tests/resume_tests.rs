// Host-side tests for the resume record and download naming.

use folio_core::content::{self, resume_data};
use folio_core::{
    ascii_filename, attachment_disposition, disposition_filename, download_filename, Experience,
    ResumeError,
};

#[test]
fn embedded_content_is_complete() {
    let data = resume_data();
    assert_eq!(data.validate(), Ok(()));
    assert_eq!(data.name, content::NAME);
    assert!(!data.education.is_empty());
    assert!(!data.experience.is_empty());
    assert!(data.skills.categories().iter().all(|(_, items)| !items.is_empty()));
}

#[test]
fn filenames_join_the_name_with_underscores() {
    assert_eq!(resume_data().download_filename(), "Resume_Riddhiman_Raut.pdf");
    assert_eq!(download_filename("  Ada   King  Lovelace "), "Resume_Ada_King_Lovelace.pdf");
}

#[test]
fn disposition_header_carries_the_filename() {
    let header = attachment_disposition("Resume_Riddhiman_Raut.pdf");
    assert_eq!(header, "attachment; filename=\"Resume_Riddhiman_Raut.pdf\"");
    assert_eq!(
        disposition_filename(&header).as_deref(),
        Some("Resume_Riddhiman_Raut.pdf")
    );
    assert_eq!(
        disposition_filename("attachment; filename=cv.pdf; size=10").as_deref(),
        Some("cv.pdf")
    );
    assert_eq!(disposition_filename("attachment"), None);
    assert_eq!(disposition_filename("attachment; filename=\"\""), None);
    assert_eq!(disposition_filename("attachment; filename=\"open"), None);
}

#[test]
fn non_ascii_names_get_an_encoded_filename() {
    let filename = download_filename("José García");
    assert_eq!(filename, "Resume_José_García.pdf");
    let header = attachment_disposition(&filename);
    assert!(header.is_ascii());
    assert_eq!(
        header,
        "attachment; filename=\"Resume_Jos__Garc_a.pdf\"; \
         filename*=UTF-8''Resume_Jos%C3%A9_Garc%C3%ADa.pdf"
    );
    assert_eq!(disposition_filename(&header).as_deref(), Some(filename.as_str()));
}

#[test]
fn quotes_never_break_the_quoted_string() {
    let filename = download_filename("Ann \"AJ\" Lee");
    assert_eq!(ascii_filename(&filename), "Resume_Ann__AJ__Lee.pdf");
    assert_eq!(ascii_filename("a\\b\tc"), "a_b_c");
    let header = attachment_disposition(&filename);
    assert!(header.starts_with("attachment; filename=\"Resume_Ann__AJ__Lee.pdf\";"));
    assert!(header.ends_with("filename*=UTF-8''Resume_Ann_%22AJ%22_Lee.pdf"));
    assert_eq!(disposition_filename(&header).as_deref(), Some(filename.as_str()));

    // a broken extended value falls back to the plain one
    assert_eq!(
        disposition_filename("attachment; filename=\"cv.pdf\"; filename*=UTF-8''%zz").as_deref(),
        Some("cv.pdf")
    );
}

#[test]
fn validation_names_the_first_gap() {
    let mut data = resume_data();
    data.email = "  ".into();
    assert_eq!(data.validate(), Err(ResumeError::MissingField("email")));

    let mut data = resume_data();
    data.experience.push(Experience {
        company: "Somewhere".into(),
        ..Experience::default()
    });
    let index = data.experience.len() - 1;
    assert_eq!(
        data.validate(),
        Err(ResumeError::IncompleteEntry {
            section: "experience",
            index,
            field: "role"
        })
    );
}

#[test]
fn skills_render_in_a_fixed_order() {
    let labels: Vec<_> = resume_data()
        .skills
        .categories()
        .iter()
        .map(|(label, _)| *label)
        .collect();
    assert_eq!(
        labels,
        ["Programming", "Machine Learning", "HPC & Cloud", "Simulation & CAE"]
    );
}
