use desktop_app_contract::AppMountContext;
use leptos::{logging::warn, *};
use serde::Deserialize;
use system_ui::prelude::*;

const BUNDLED_PROJECTS: &str = include_str!("../assets/projects.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct Project {
    name: String,
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    link: String,
    picture: String,
}

impl Project {
    fn picture_url(&self) -> String {
        format!("/assets/projects/{}", self.picture)
    }
}

fn parse_projects(raw: &str) -> Result<Vec<Project>, String> {
    serde_json::from_str(raw).map_err(|e| format!("projects: {e}"))
}

fn load_projects(raw: &str) -> Vec<Project> {
    parse_projects(raw).unwrap_or_else(|err| {
        warn!("failed to parse bundled projects: {err}");
        Vec::new()
    })
}

#[component]
/// Project cards read from the bundled project list.
pub fn ProjectsApp(
    /// Mount context from the desktop runtime.
    context: AppMountContext,
) -> impl IntoView {
    let links = context.services.links;
    let projects = load_projects(BUNDLED_PROJECTS);

    view! {
        <div class="app-shell app-projects">
            <Heading level=2>"My Projects"</Heading>
            {if projects.is_empty() {
                view! { <EmptyState icon=IconName::Folder message="No projects yet." /> }.into_view()
            } else {
                view! {
                    <div class="projects-grid">
                        {projects
                            .into_iter()
                            .map(|project| {
                                let picture = project.picture_url();
                                let link = project.link.clone();
                                view! {
                                    <Card layout_class="projects-card">
                                        <img class="projects-picture" src=picture alt=project.name.clone() />
                                        <div class="projects-card-body">
                                            <Heading level=3>{project.name}</Heading>
                                            <Text tone=TextTone::Secondary>{project.description}</Text>
                                            <div class="projects-tags">
                                                {project
                                                    .tags
                                                    .into_iter()
                                                    .map(|tag| view! { <Badge>{tag}</Badge> })
                                                    .collect_view()}
                                            </div>
                                            <Button
                                                variant=ButtonVariant::Primary
                                                leading_icon=IconName::ExternalLink
                                                on_click=Callback::new(move |_| links.open(link.clone()))
                                            >
                                                "Visit"
                                            </Button>
                                        </div>
                                    </Card>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_projects_parse() {
        let projects = parse_projects(BUNDLED_PROJECTS).expect("bundled projects");
        assert!(!projects.is_empty());
        assert!(projects.iter().all(|p| p.link.starts_with("http")));
    }

    #[test]
    fn picture_resolves_under_the_projects_asset_dir() {
        let projects = parse_projects(
            r#"[{"name":"A","description":"d","tags":["x"],"link":"https://a.dev","picture":"a.png"}]"#,
        )
        .expect("one project");
        assert_eq!(projects[0].picture_url(), "/assets/projects/a.png");
        assert_eq!(projects[0].tags, vec!["x".to_string()]);
    }

    #[test]
    fn malformed_projects_render_an_empty_list() {
        assert!(parse_projects("{not json").is_err());
        assert_eq!(load_projects("{not json"), Vec::new());
    }
}
