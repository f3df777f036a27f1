//! Partner Carousel Component
//!
//! Desktop shows an endless marquee of logos that pauses on hover. Narrow
//! screens get a pager with prev/next buttons and dots instead; the stylesheet
//! decides which of the two is visible.

use leptos::ev;
use leptos::prelude::*;
use lib_motion::marquee::{visible_cards, PartnerPager, CARD_WIDTH, SPEED};
use lib_motion::Marquee;
use shared::dto::content::Logo;

use crate::components::icons::{Icon, IconKind};
use crate::services::frame::FrameLoop;
use crate::utils::constants::PAGER_CARD_DELAY_S;
use crate::utils::format::animation_delay;

#[component]
pub fn PartnerCarousel(partners: Vec<Logo>) -> impl IntoView {
    if partners.is_empty() {
        return None;
    }

    Some(view! {
        <div class="partner-carousel">
            <PartnerMarquee partners=partners.clone()/>
            <PartnerPagerView partners=partners/>
        </div>
    })
}

#[component]
fn PartnerMarquee(partners: Vec<Logo>) -> impl IntoView {
    let marquee = match Marquee::new(CARD_WIDTH, partners.len(), SPEED) {
        Ok(marquee) => RwSignal::new(marquee),
        Err(err) => {
            log::warn!("Partner marquee disabled: {}", err);
            return None;
        }
    };

    let frames = StoredValue::new_local(FrameLoop::new(move |_| {
        marquee
            .try_update(|marquee| {
                marquee.tick();
                !marquee.is_paused()
            })
            .unwrap_or(false)
    }));
    let start = move || {
        frames.with_value(|frames| {
            if let Err(err) = frames.start() {
                log::warn!("Partner marquee could not start: {}", err);
            }
        });
    };
    start();

    on_cleanup(move || frames.with_value(FrameLoop::cancel));

    let pause = move |_: web_sys::MouseEvent| marquee.update(|marquee| marquee.set_paused(true));
    let resume = move |_: web_sys::MouseEvent| {
        marquee.update(|marquee| marquee.set_paused(false));
        start();
    };

    // Two copies so the strip never shows a gap while wrapping.
    let cards = partners
        .iter()
        .chain(partners.iter())
        .map(|logo| view! { <LogoCard logo=logo.clone()/> })
        .collect_view();

    Some(view! {
        <div class="marquee" on:mouseenter=pause on:mouseleave=resume>
            <div class="marquee-track" style=move || format!("transform: {};", marquee.with(Marquee::transform))>
                {cards}
            </div>
        </div>
    })
}

#[component]
fn PartnerPagerView(partners: Vec<Logo>) -> impl IntoView {
    let pager = RwSignal::new(PartnerPager::new(partners.len()));
    let visible = RwSignal::new(viewport_cards());

    let resize = window_event_listener(ev::resize, move |_| visible.set(viewport_cards()));
    on_cleanup(move || resize.remove());

    let partners = StoredValue::new(partners);
    let dot_count = pager.with_untracked(PartnerPager::dot_count);

    let window = move || {
        let indices = pager.with(|pager| pager.visible(visible.get()));
        partners.with_value(|partners| {
            indices
                .into_iter()
                .enumerate()
                .filter_map(|(slot, index)| {
                    partners.get(index).cloned().map(|logo| {
                        view! {
                            <div class="pager-slot" style=animation_delay(slot, PAGER_CARD_DELAY_S)>
                                <LogoCard logo=logo/>
                            </div>
                        }
                    })
                })
                .collect_view()
        })
    };

    let dots = (0..dot_count)
        .map(|set| {
            let class = move || {
                if pager.with(PartnerPager::active_dot) == set {
                    "pager-dot active"
                } else {
                    "pager-dot"
                }
            };
            view! {
                <button
                    type="button"
                    class=class
                    aria-label=format!("Go to partner set {}", set + 1)
                    on:click=move |_| pager.update(|pager| pager.go_to_set(set))
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="partner-pager">
            <div class="pager-row">
                <button
                    type="button"
                    class="pager-arrow"
                    aria-label="Previous partners"
                    on:click=move |_| pager.update(PartnerPager::prev)
                >
                    <Icon kind=IconKind::ChevronLeft/>
                </button>
                <div class="pager-window">{window}</div>
                <button
                    type="button"
                    class="pager-arrow"
                    aria-label="Next partners"
                    on:click=move |_| pager.update(PartnerPager::next)
                >
                    <Icon kind=IconKind::ChevronRight/>
                </button>
            </div>
            <div class="pager-dots">{dots}</div>
        </div>
    }
}

#[component]
fn LogoCard(logo: Logo) -> impl IntoView {
    view! {
        <div class="logo-card">
            <img src=logo.url alt=logo.name loading="lazy"/>
        </div>
    }
}

fn viewport_cards() -> usize {
    let width = web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0);
    visible_cards(width)
}
