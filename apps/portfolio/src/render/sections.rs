use maud::{html, Markup};

use super::{highlighted, NAV_ITEMS, SCROLLED_OFFSET_PX};
use crate::content::{ContactLink, Education, Hobby, Job, Profile, Project, SkillGroup};
use crate::effects::{Accordion, TypingParams};
use crate::theme::Theme;

pub(super) fn header(profile: &Profile, theme: Theme) -> Markup {
    let (toggle_label, toggle_title) = match theme {
        Theme::Dark => ("Light", "Switch to light mode"),
        Theme::Light => ("Dark", "Switch to dark mode"),
    };
    html! {
        header class="site-header" data-scrolled-offset=(SCROLLED_OFFSET_PX) {
            a class="brand" href="#" {
                span class="brand-name" {
                    (profile.first_name) " " span class="accent" { (profile.last_name) }
                }
                span class="brand-role" { (profile.role) }
            }
            div class="header-actions" {
                button id="theme-toggle" type="button" title=(toggle_title) data-theme=(theme.as_str()) {
                    (toggle_label)
                }
                nav {
                    @for (label, id) in NAV_ITEMS {
                        a class="nav-link" href=(format!("#{id}")) { (label) }
                    }
                }
            }
        }
    }
}

pub(super) fn hero(profile: &Profile, contacts: &[ContactLink], typing: &TypingParams) -> Markup {
    html! {
        header class="hero" {
            h1 {
                (profile.first_name) " " span class="gradient-text" { (profile.last_name) }
            }
            p class="hero-description" {
                span id="typing"
                    data-typing-src="/api/v1/hero/typing"
                    data-typing-text=(typing.text)
                    data-interval-ms=(typing.char_interval.as_millis().to_string())
                    data-delay-ms=(typing.initial_delay.as_millis().to_string()) {}
                span class="typing-cursor" { "|" }
                noscript { (typing.text) }
            }
            div class="contacts" {
                @for link in contacts {
                    (contact_link(link))
                }
            }
        }
    }
}

fn contact_link(link: &ContactLink) -> Markup {
    let new_tab = link.opens_new_tab();
    html! {
        a class="contact"
            href=(link.href())
            target=[new_tab.then_some("_blank")]
            rel=[new_tab.then_some("noopener noreferrer")] {
            @if let Some(icon) = &link.icon {
                span class="icon" { (icon) }
            }
            span { (link.label) }
        }
    }
}

/// A section that fades in once it scrolls into view.
pub(super) fn reveal_section(id: Option<&str>, title: &str, threshold: f64, body: Markup) -> Markup {
    html! {
        section id=[id] class="reveal" data-reveal-threshold=(threshold.to_string()) {
            h2 { span class="bar" {} (title) }
            (body)
        }
    }
}

pub(super) fn experience(jobs: &[Job], accordion: &Accordion) -> Markup {
    html! {
        div class="experience" {
            @for (i, job) in jobs.iter().enumerate() {
                details class="job" data-index=(i) open[accordion.is_expanded(i)] {
                    summary {
                        div class="job-heading" {
                            h3 { (job.title) }
                            span class="period" { (job.period) }
                        }
                        @if let Some(url) = &job.company_url {
                            a class="company" href=(url) target="_blank" rel="noopener noreferrer" {
                                @if let Some(logo) = &job.company_logo {
                                    img class="logo" src=(logo) alt="";
                                }
                                (job.company)
                            }
                        } @else {
                            p class="company" { (job.company) }
                        }
                    }
                    ul {
                        @for bullet in &job.bullets {
                            li class="bullet" { (highlighted(&bullet.spans())) }
                        }
                    }
                }
            }
        }
    }
}

pub(super) fn projects(projects: &[Project]) -> Markup {
    html! {
        div class="projects" {
            @for project in projects {
                article class="project" {
                    @if let Some(label) = &project.label {
                        span class="project-label" { (label) }
                    }
                    h3 { (project.name) }
                    p class="tech" { (project.tech) }
                    h4 { "Overview" }
                    p { (project.overview) }
                    @if !project.features.is_empty() {
                        h4 { "Key Features" }
                        ul {
                            @for feature in &project.features {
                                li class="bullet" { (feature) }
                            }
                        }
                    }
                    @if !project.contributions.is_empty() {
                        h4 { "My Contributions" }
                        ul {
                            @for item in &project.contributions {
                                li class="bullet" { (item) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub(super) fn education(entries: &[Education]) -> Markup {
    html! {
        @for entry in entries {
            div class="card" {
                h3 { (entry.degree) }
                p class="school" { (entry.school) }
                p class="muted" {
                    (entry.period)
                    @if let Some(grade) = &entry.grade {
                        " · " (grade)
                    }
                }
            }
        }
    }
}

pub(super) fn hobbies(hobbies: &[Hobby]) -> Markup {
    html! {
        div class="hobbies" {
            @for hobby in hobbies {
                div class="hobby" {
                    span class="icon" { (hobby.icon) }
                    span { (hobby.label) }
                }
            }
        }
    }
}

pub(super) fn skills(groups: &[SkillGroup]) -> Markup {
    html! {
        aside id="skills" class="skills" {
            h3 { "Skills" }
            @for group in groups {
                div class="skill-group" {
                    h4 { (group.category) }
                    div class="tags" {
                        @for skill in &group.skills {
                            span class="tag" { (skill) }
                        }
                    }
                }
            }
        }
    }
}
