use std::fmt::Write;

use crate::page::{AboutPage, ExperienceView, LoadState};

/// Plain-text rendering of the page for the terminal.
pub fn render_state(state: &LoadState) -> String {
    match state {
        LoadState::Idle | LoadState::Loading => "Loading...\n".to_string(),
        LoadState::Failed(msg) => format!("Error: {msg}\n"),
        LoadState::Loaded(page) => render_page(page),
    }
}

pub fn render_page(page: &AboutPage) -> String {
    let Some(personal) = &page.personal else {
        return "No personal information found\n".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", personal.name);
    if let Some(passion) = &personal.passion {
        let _ = writeln!(out, "{passion}");
    }
    for line in [&personal.address, &personal.phone].into_iter().flatten() {
        let _ = writeln!(out, "{line}");
    }
    if !personal.email.is_empty() {
        let _ = writeln!(out, "mailto:{}", personal.email);
    }
    for link in [&personal.github, &personal.linkedin].into_iter().flatten() {
        let _ = writeln!(out, "{link}");
    }

    section(&mut out, "Education");
    for edu in &page.educations {
        let _ = writeln!(out, "- {} ({})", edu.record.title(), edu.record.degree);
        if let Some(field) = &edu.record.field {
            let _ = writeln!(out, "  Field: {field}");
        }
        if !edu.years.is_empty() {
            let _ = writeln!(out, "  Years: {}", edu.years);
        }
        if let Some(desc) = &edu.record.description {
            let _ = writeln!(out, "  {desc}");
        }
    }

    section(&mut out, "Experience");
    out.push_str(&render_timeline(&page.experiences));

    section(&mut out, "Projects");
    for project in &page.projects {
        let _ = writeln!(out, "- {}", project.record.name);
        if let Some(desc) = &project.record.description {
            let _ = writeln!(out, "  {desc}");
        }
        if !project.tech_stack.is_empty() {
            let _ = writeln!(out, "  Tech Stacks: {}", project.tech_stack);
        }
        if let Some(url) = &project.record.repository_url {
            let _ = writeln!(out, "  {url}");
        }
    }

    section(&mut out, "Skills");
    if page.skills.is_empty() {
        let _ = writeln!(out, "No skills");
    }
    for skill in &page.skills {
        match &skill.image {
            Some(img) => {
                let mime = img.mime.as_deref().unwrap_or("image");
                let _ = writeln!(out, "- {} [{mime}, {} bytes]", skill.name, img.bytes);
            }
            None => {
                let _ = writeln!(out, "- {}", skill.name);
            }
        }
    }

    section(&mut out, "Certificates");
    if page.certificates.is_empty() {
        let _ = writeln!(out, "No certificates");
    }
    for cert in &page.certificates {
        let _ = writeln!(out, "- {}", cert.title);
        if let Some(issuer) = &cert.issuer {
            let _ = writeln!(out, "  {issuer}");
        }
        if let Some(url) = &cert.certificate_url {
            let _ = writeln!(out, "  {url}");
        }
    }

    out
}

pub fn render_timeline(experiences: &[ExperienceView]) -> String {
    let mut out = String::new();
    for exp in experiences {
        let _ = writeln!(out, "- {}", exp.record.organization);
        if !exp.record.position.is_empty() {
            let _ = writeln!(out, "  {}", exp.record.position);
        }
        let _ = writeln!(out, "  ({} - {})", exp.duration.start, exp.duration.end);
        if let Some(desc) = &exp.record.description {
            let _ = writeln!(out, "  {desc}");
        }
        if let Some(site) = &exp.record.website {
            let _ = writeln!(out, "  {site}");
        }
    }
    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}\n{}", "-".repeat(title.len()));
}
