//! Portfolio apps: the introduction card, the about page, skills, projects and games.
//!
//! Every outbound link goes through [`desktop_app_contract::LinkService`] so the shell decides
//! how external pages open.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod about;
mod games;
mod intro;
mod projects;
mod skills;

pub use about::AboutApp;
pub use games::GamesApp;
pub use intro::IntroApp;
pub use projects::ProjectsApp;
pub use skills::SkillsApp;

use system_ui::IconName;

/// A social profile shown by the intro and about apps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SocialLink {
    label: &'static str,
    href: &'static str,
    icon: IconName,
    color: &'static str,
}

const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "Facebook",
        href: "https://www.facebook.com/mroppy69",
        icon: IconName::Facebook,
        color: "#1877f2",
    },
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/mroppy21",
        icon: IconName::Instagram,
        color: "#e4405f",
    },
    SocialLink {
        label: "YouTube",
        href: "https://www.youtube.com/@mroppy",
        icon: IconName::Youtube,
        color: "#ff0000",
    },
    SocialLink {
        label: "Discord",
        href: "http://discordapp.com/users/387161872136273922",
        icon: IconName::MessageCircle,
        color: "#5865f2",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_links_are_absolute_urls() {
        for link in SOCIAL_LINKS {
            assert!(link.href.starts_with("http"), "{}", link.label);
        }
    }
}
