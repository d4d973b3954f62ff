use crate::client::PortfolioSource;
use crate::errors::FolioResult;
use crate::models::ExperienceRecord;
use crate::page::state::{LoadState, PageController, PageEvent};
use crate::page::view::{AboutPage, ExperienceView};
use crate::timeline::{sort_experiences, DurationFormatter};

/// Fetches every collection and assembles the page. The first failing fetch
/// fails the whole page.
pub async fn load_about_page(
    source: &dyn PortfolioSource,
    formatter: &DurationFormatter,
) -> FolioResult<AboutPage> {
    tracing::info!(source = source.name(), "loading about page");

    let (personals, educations, experiences, projects, skills, certificates) = tokio::try_join!(
        source.personals(),
        source.educations(),
        source.experiences(),
        source.projects(),
        source.skills(),
        source.certificates(),
    )?;

    Ok(AboutPage {
        personal: personals.into_iter().next(),
        educations: educations.into_iter().map(Into::into).collect(),
        experiences: build_timeline(experiences, formatter),
        projects: projects.into_iter().map(Into::into).collect(),
        // Newest skills are appended last by the backend.
        skills: skills.into_iter().rev().map(Into::into).collect(),
        certificates,
    })
}

pub fn build_timeline(
    records: Vec<ExperienceRecord>,
    formatter: &DurationFormatter,
) -> Vec<ExperienceView> {
    sort_experiences(records)
        .into_iter()
        .map(|r| ExperienceView::new(r, formatter))
        .collect()
}

/// Runs a load through the controller so every transition is recorded.
pub async fn refresh<'a>(
    controller: &'a mut PageController,
    source: &dyn PortfolioSource,
    formatter: &DurationFormatter,
) -> &'a LoadState {
    if !controller.dispatch(PageEvent::FetchStarted) {
        return controller.state();
    }
    let event = match load_about_page(source, formatter).await {
        Ok(page) => PageEvent::FetchSucceeded(page),
        Err(e) => {
            tracing::error!(error = %e, "about page failed to load");
            PageEvent::FetchFailed(e.to_string())
        }
    };
    controller.dispatch(event);
    controller.state()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::StaticSource;
    use crate::client::http::SKILLS;
    use crate::models::{Personal, Skill};

    fn exp(org: &str, start: &str, end: &str) -> ExperienceRecord {
        ExperienceRecord {
            organization: org.into(),
            start_date: Some(start.into()),
            end_date: Some(end.into()),
            ..Default::default()
        }
    }

    fn skill(name: &str) -> Skill {
        Skill {
            name: name.into(),
            ..Default::default()
        }
    }

    fn populated() -> StaticSource {
        StaticSource {
            personals: vec![
                Personal {
                    name: "Ada".into(),
                    email: "ada@example.com".into(),
                    ..Default::default()
                },
                Personal {
                    name: "Ignored".into(),
                    ..Default::default()
                },
            ],
            experiences: vec![
                exp("A", "2021-06-01", "Present"),
                exp("B", "2019-01-01", "2022-01-01"),
                exp("C", "2023-01-01", "Present"),
            ],
            skills: vec![skill("Rust"), skill("Go"), skill("SQL")],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn assembles_sorted_page() {
        let source = populated();
        let page = load_about_page(&source, &DurationFormatter::default()).await.unwrap();

        assert_eq!(page.personal.as_ref().map(|p| p.name.as_str()), Some("Ada"));
        let orgs: Vec<_> = page
            .experiences
            .iter()
            .map(|e| e.record.organization.as_str())
            .collect();
        assert_eq!(orgs, vec!["C", "A", "B"]);
        assert_eq!(page.experiences[2].duration.start, "January 2019");
        assert_eq!(page.experiences[2].duration.end, "January 2022");

        let skills: Vec<_> = page.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(skills, vec!["SQL", "Go", "Rust"]);
    }

    #[tokio::test]
    async fn empty_backend_has_no_personal() {
        let page = load_about_page(&StaticSource::default(), &DurationFormatter::default())
            .await
            .unwrap();
        assert!(page.personal.is_none());
        assert!(page.experiences.is_empty());
    }

    #[tokio::test]
    async fn refresh_reaches_loaded() {
        let source = populated();
        let mut ctl = PageController::new();
        let state = refresh(&mut ctl, &source, &DurationFormatter::default()).await;
        assert!(matches!(state, LoadState::Loaded(page) if page.experiences.len() == 3));
    }

    #[tokio::test]
    async fn refresh_reports_failing_collection() {
        let source = StaticSource {
            failing: Some(SKILLS),
            ..populated()
        };
        let mut ctl = PageController::new();
        let state = refresh(&mut ctl, &source, &DurationFormatter::default()).await;
        assert_eq!(state, &LoadState::Failed("Failed to fetch skills info".into()));
    }
}
