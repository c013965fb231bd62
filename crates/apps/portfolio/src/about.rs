use desktop_app_contract::AppMountContext;
use leptos::*;
use system_ui::prelude::*;

use crate::SOCIAL_LINKS;

struct InfoCard {
    icon: IconName,
    color: &'static str,
    title: &'static str,
    value: &'static str,
    sub: &'static str,
}

const JOURNEY: [InfoCard; 4] = [
    InfoCard {
        icon: IconName::Briefcase,
        color: "#00d8ff",
        title: "Experience",
        value: "6+ Months",
        sub: "Web Development",
    },
    InfoCard {
        icon: IconName::Target,
        color: "#ff0055",
        title: "Specialization",
        value: "Front-end",
        sub: "React, Next.js",
    },
    InfoCard {
        icon: IconName::GraduationCap,
        color: "#ffcc00",
        title: "Education",
        value: "Diploma",
        sub: "Civil Engineering",
    },
    InfoCard {
        icon: IconName::Target,
        color: "#00ff99",
        title: "Goal",
        value: "SEO",
        sub: "Optimization",
    },
];

const CONTACT_ROWS: [(IconName, &str); 3] = [
    (IconName::MapPin, "Dhaka, Bangladesh"),
    (IconName::Mail, "Contact via Socials"),
    (IconName::Languages, "Bangla, English, Hindi"),
];

const PERSONAL_DETAILS: [(&str, &str); 3] = [
    ("Age", "23 Years Old"),
    ("Status", "Single"),
    ("Nationality", "Bangladeshi"),
];

const INTERESTS: [(IconName, &str); 4] = [
    (IconName::Gamepad, "Gaming"),
    (IconName::Palette, "Anime"),
    (IconName::Music, "Music"),
    (IconName::Film, "Movies"),
];

#[component]
/// Profile page with a sidebar and a scrolling detail column.
pub fn AboutApp(
    /// Mount context from the desktop runtime.
    context: AppMountContext,
) -> impl IntoView {
    let links = context.services.links;

    view! {
        <div class="app-shell app-about">
            <aside class="about-sidebar">
                <img class="about-avatar" src="/assets/aboutme/profile.jpg" alt="Profile" />
                <Heading level=1>"Hasanuzzaman Oppy"</Heading>
                <Text tone=TextTone::Accent>"Front-end Web Developer"</Text>
                <div class="about-socials">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <IconButton
                                    icon=link.icon
                                    aria_label=link.label
                                    on_click=Callback::new(move |_| links.open(link.href))
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <div class="about-contact">
                    <h3>"Contact Info"</h3>
                    {CONTACT_ROWS
                        .into_iter()
                        .map(|(icon, text)| {
                            view! {
                                <div class="about-contact-row">
                                    <Icon icon size=IconSize::Sm />
                                    <span>{text}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </aside>

            <main class="about-main">
                <section>
                    <Heading level=2>"Overview"</Heading>
                    <Card layout_class="about-overview">
                        "Hello! I'm a passionate developer dedicated to building beautiful and functional web experiences. "
                        "I specialize in Front-end technologies like React and Next.js, transforming complex requirements into "
                        "simple, elegant solutions."
                    </Card>
                </section>
                <section>
                    <Heading level=2>"Professional Journey"</Heading>
                    <div class="about-info-grid">
                        {JOURNEY
                            .iter()
                            .map(|card| {
                                view! {
                                    <Card layout_class="about-info-card">
                                        <Icon icon=card.icon size=IconSize::Md color=card.color />
                                        <div>
                                            <div class="about-info-title">{card.title}</div>
                                            <div class="about-info-value">{card.value}</div>
                                            <div class="about-info-sub">{card.sub}</div>
                                        </div>
                                    </Card>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
                <section>
                    <Heading level=2>"Personal Details"</Heading>
                    <Card layout_class="about-details">
                        {PERSONAL_DETAILS
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="about-detail-row">
                                        <span>{label}</span>
                                        <strong>{value}</strong>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </Card>
                </section>
                <section>
                    <Heading level=2>"Interests & Hobbies"</Heading>
                    <div class="about-interests">
                        {INTERESTS
                            .into_iter()
                            .map(|(icon, label)| {
                                view! {
                                    <Badge layout_class="about-interest">
                                        <Icon icon size=IconSize::Sm />
                                        <span>{label}</span>
                                    </Badge>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </main>
        </div>
    }
}
