//! Landing Page
//!
//! The single scrolling page: hero, strategic partners, the five-day timeline,
//! last year's video, the copy block, event partners and the connect footer.
//! Every section carries an id from [`SECTION_IDS`] so menu items and
//! `?section=` deep links can scroll to it.
//!
//! [`SECTION_IDS`]: crate::utils::constants::SECTION_IDS

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use shared::dto::content::{EventDay, Logo, SiteContent};

use crate::components::{Icon, IconKind, PartnerCarousel, StaggeredMenu};
use crate::config::site_config;
use crate::services::navigation;
use crate::state::menu::MenuContext;
use crate::utils::constants::{DEEP_LINK_DELAY_MS, TIMELINE_CARD_DELAY_S};
use crate::utils::format::animation_delay;
use crate::utils::url::deep_link_section;

#[component]
pub fn LandingPage() -> impl IntoView {
    let config = site_config();
    let content = &config.content;
    let menu = MenuContext::new();

    // Honor ?section= once the page has laid out.
    Effect::new(move |_| {
        let Some(section) = deep_link_section() else {
            return;
        };
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(DEEP_LINK_DELAY_MS).await;
            if let Err(err) = navigation::scroll_to_section(&section) {
                log::warn!("Deep link ignored: {}", err);
            }
        });
    });

    view! {
        <div class=move || if menu.is_open() { "landing menu-open" } else { "landing" }>
            <StaggeredMenu
                options=config.menu.clone()
                items=content.menu_items.clone()
                social_items=content.social_items.clone()
                on_menu_open=move |_| menu.set_open(true)
                on_menu_close=move |_| menu.set_open(false)
                on_navigate=|link: String| navigation::navigate_link(&link)
            />

            <Hero content=content.clone()/>

            <main class="landing-main">
                <StrategicPartners partners=content.strategic_partners.clone()/>
                <Timeline days=content.days.clone()/>
                <Highlights title=content.video_title.clone() embed_url=content.video_embed_url.clone()/>
                <About intro=content.intro.clone() highlights=content.highlights.clone()/>

                <section id="event-partners" class="section">
                    <SectionHeading title="Event Partners"/>
                    <PartnerCarousel partners=content.event_partners.clone()/>
                </section>

                <Connect content=content.clone()/>
            </main>
        </div>
    }
}

#[component]
fn SectionHeading(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2>{title}</h2>
            <div class="section-rule"></div>
        </div>
    }
}

#[component]
fn Hero(content: SiteContent) -> impl IntoView {
    let logos = content
        .top_logos
        .iter()
        .enumerate()
        .map(|(index, logo)| {
            let class = if index == 1 { "hero-logo hero-logo-main" } else { "hero-logo" };
            view! { <img class=class src=logo.url.clone() alt=logo.name.clone()/> }
        })
        .collect_view();

    view! {
        <header id="home" class="hero">
            <div class="hero-logos">{logos}</div>

            <div class="hero-copy">
                <div class="hero-divider"><span>"Join Us"</span></div>
                <h1 class="gradient-text">{content.title}</h1>
                <p class="hero-organizer">{content.organizer}</p>
                <h2 class="gradient-text">{content.tagline}</h2>

                <div class="hero-facts">
                    <span class="hero-fact">
                        <Icon kind=IconKind::Calendar/>
                        {content.date_range_label}
                    </span>
                    <span class="hero-fact">{content.hours_label}</span>
                    <a class="hero-fact" href=content.venue.url target="_blank" rel="noopener noreferrer">
                        {content.venue.label}
                        <Icon kind=IconKind::MapPin/>
                    </a>
                </div>

                <a class="register-button" href=content.register_url target="_blank" rel="noopener noreferrer">
                    <span>"Register"</span>
                    <Icon kind=IconKind::ChevronRight/>
                </a>
            </div>
        </header>
    }
}

#[component]
fn StrategicPartners(partners: Vec<Logo>) -> impl IntoView {
    view! {
        <section id="partners" class="section">
            <SectionHeading title="Strategic Partners"/>
            <div class="strategic-partners">
                {partners
                    .into_iter()
                    .map(|logo| view! {
                        <div class="strategic-card">
                            <img src=logo.url alt=logo.name/>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Timeline(days: Vec<EventDay>) -> impl IntoView {
    view! {
        <section id="timeline" class="section">
            <div class="section-heading">
                <h2>{format!("{} Days of Innovation", days.len())}</h2>
                <p>"Experience a journey through groundbreaking sessions and networking"</p>
            </div>
            <div class="timeline-grid">
                {days
                    .into_iter()
                    .enumerate()
                    .map(|(index, day)| view! { <DayCard day=day style=animation_delay(index, TIMELINE_CARD_DELAY_S)/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn DayCard(day: EventDay, style: String) -> impl IntoView {
    let date = day.date_label();
    view! {
        <article class="day-card slide-up" style=style>
            <div class="day-icon">
                <Icon kind=day.icon/>
            </div>
            <h3>{format!("Day {}", day.day)}</h3>
            <time datetime=day.date.to_string()>{date}</time>
            <h4>{day.title}</h4>
            <p>{day.audience}</p>
        </article>
    }
}

#[component]
fn Highlights(title: String, embed_url: String) -> impl IntoView {
    view! {
        <section id="highlights" class="section">
            <SectionHeading title=title.clone()/>
            <div class="video-frame">
                <iframe
                    src=embed_url
                    title=title
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                ></iframe>
            </div>
        </section>
    }
}

#[component]
fn About(intro: String, highlights: Vec<String>) -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <h2 class="gradient-text">"Get ready for an exceptional opportunity!"</h2>
            <p class="about-intro">{intro}</p>
            <h3 class="gradient-text">"Here's what's waiting for you:"</h3>
            <ul class="about-highlights">
                {highlights.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn Connect(content: SiteContent) -> impl IntoView {
    let socials = content
        .social_items
        .into_iter()
        .map(|social| {
            let class = format!("connect-link connect-{}", social.icon.name());
            view! {
                <a class=class href=social.link target="_blank" rel="noopener noreferrer" aria-label=social.label>
                    <Icon kind=social.icon/>
                </a>
            }
        })
        .collect_view();

    view! {
        <footer id="connect" class="section connect">
            <h3>"Connect With Us"</h3>
            <div class="connect-links">{socials}</div>
            <p class="credit">
                "Powered by "
                <a href=content.credit.url target="_blank" rel="noopener noreferrer">{content.credit.label}</a>
                " ©"
            </p>
        </footer>
    }
}
