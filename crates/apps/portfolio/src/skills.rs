use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Skill {
    name: &'static str,
    level: u8,
    color: &'static str,
}

const SKILLS: [Skill; 8] = [
    Skill { name: "HTML", level: 96, color: "#E34F26" },
    Skill { name: "CSS", level: 85, color: "#1572B6" },
    Skill { name: "JavaScript", level: 80, color: "#F7DF1E" },
    Skill { name: "React", level: 80, color: "#61DAFB" },
    Skill { name: "Next.js", level: 70, color: "#000000" },
    Skill { name: "TypeScript", level: 75, color: "#3178C6" },
    Skill { name: "Tailwind CSS", level: 70, color: "#06B6D4" },
    Skill { name: "Figma", level: 10, color: "#F24E1E" },
];

/// Black brand colours vanish on the dark window background.
fn bar_color(color: &str) -> &str {
    if color == "#000000" {
        "#ffffff"
    } else {
        color
    }
}

#[component]
/// Skill bars.
pub fn SkillsApp() -> impl IntoView {
    view! {
        <div class="app-shell app-skills">
            <Heading level=2>"Technical Proficiency"</Heading>
            <div class="skills-list">
                {SKILLS
                    .into_iter()
                    .map(|skill| {
                        view! {
                            <div class="skills-row">
                                <div class="skills-row-label">
                                    <span>{skill.name}</span>
                                    <span class="skills-row-level">{format!("{}%", skill.level)}</span>
                                </div>
                                <ProgressBar
                                    value=f64::from(skill.level)
                                    color=bar_color(skill.color).to_string()
                                    aria_label=skill.name
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn black_brand_colour_renders_white() {
        assert_eq!(bar_color("#000000"), "#ffffff");
        assert_eq!(bar_color("#61DAFB"), "#61DAFB");
    }

    #[test]
    fn levels_match_the_published_profile() {
        let levels: Vec<_> = SKILLS.iter().map(|s| (s.name, s.level)).collect();
        assert_eq!(
            levels,
            vec![
                ("HTML", 96),
                ("CSS", 85),
                ("JavaScript", 80),
                ("React", 80),
                ("Next.js", 70),
                ("TypeScript", 75),
                ("Tailwind CSS", 70),
                ("Figma", 10),
            ]
        );
    }
}
