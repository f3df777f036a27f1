//! Staggered Slide-Out Menu Component
//!
//! Toggle button plus an off-canvas panel docked to the left or right edge.
//! All motion comes from a [`MenuController`]: the component renders the
//! controller's scene as inline styles and ticks it from a frame loop that
//! only runs while something is animating.
//!
//! A pointer-down outside the component closes an open menu. Menu items
//! either scroll to a section or open an external page, then close the menu.

use leptos::either::Either;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use lib_motion::scene::ICON_BARS;
use lib_motion::{ButtonPalette, DockEdge, MenuController, MenuEvent, MenuOptions, SceneLayout, Visual};
use shared::dto::menu::{MenuItem, SocialItem};
use shared::utils::format_ordinal;
use wasm_bindgen::JsCast;

use crate::components::icons::Icon;
use crate::services::frame::FrameLoop;
use crate::services::navigation;
use crate::utils::constants::MENU_PANEL_ID;
use crate::utils::format::accent_style;

#[component]
pub fn StaggeredMenu(
    #[prop(optional)] options: MenuOptions,
    #[prop(optional)] items: Vec<MenuItem>,
    #[prop(optional)] social_items: Vec<SocialItem>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] on_menu_open: Option<Callback<()>>,
    #[prop(optional, into)] on_menu_close: Option<Callback<()>>,
    /// Receives the target (URL or section id) of a clicked item. Without
    /// it the menu navigates by itself.
    #[prop(optional, into)]
    on_navigate: Option<Callback<String>>,
) -> impl IntoView {
    let layout = menu_layout(&options, items.len(), social_items.len());
    let controller = RwSignal::new(MenuController::new(&options, layout));
    let root_ref = NodeRef::<html::Div>::new();

    let frames = StoredValue::new_local(FrameLoop::new(move |dt| {
        controller
            .try_update(|menu| {
                menu.tick(dt);
                menu.is_animating()
            })
            .unwrap_or(false)
    }));

    let notify = move |event: MenuEvent| {
        log::debug!("Menu {:?}", event);
        let callback = match event {
            MenuEvent::Opened => on_menu_open,
            MenuEvent::Closed => on_menu_close,
        };
        if let Some(callback) = callback {
            callback.run(());
        }
        frames.with_value(|frames| {
            if let Err(err) = frames.start() {
                log::warn!("Menu animation could not start: {}", err);
            }
        });
    };

    let toggle = move || {
        if let Some(event) = controller.try_update(MenuController::toggle) {
            notify(event);
        }
    };

    let navigate = move |item: &MenuItem| {
        let Some(navigation) = controller.try_update(|menu| menu.navigate(item)) else {
            return;
        };
        match on_navigate {
            Some(callback) => callback.run(navigation.target.as_str().to_string()),
            None => {
                if let Err(err) = navigation::navigate(&navigation.target) {
                    log::warn!("Menu navigation failed: {}", err);
                }
            }
        }
        if let Some(event) = navigation.event {
            notify(event);
        }
    };

    let pointer_listener = window_event_listener(ev::mousedown, move |event| {
        if !controller.with_untracked(MenuController::is_open) {
            return;
        }
        let Some(inside) = event_inside(root_ref, &event) else {
            return;
        };
        if let Some(event) = controller.try_update(|menu| menu.pointer_down(inside)).flatten() {
            notify(event);
        }
    });

    on_cleanup(move || {
        pointer_listener.remove();
        frames.with_value(FrameLoop::cancel);
        controller.try_update(MenuController::cancel_all);
    });

    let is_open = move || controller.with(MenuController::is_open);
    let numbered = layout.numbered;

    let backdrops = options
        .colors
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, color)| {
            let style = move || {
                controller.with(|menu| {
                    menu.scene()
                        .backdrops
                        .get(index)
                        .map(|visual| backdrop_style(&color, visual))
                        .unwrap_or_default()
                })
            };
            view! { <div class="sm-prelayer" style=style></div> }
        })
        .collect_view();

    let bars = (0..ICON_BARS)
        .map(|bar| {
            let style = move || {
                controller.with(|menu| {
                    menu.scene()
                        .icon_bars
                        .get(bar)
                        .map(|visual| bar_style(visual, &menu.palette()))
                        .unwrap_or_default()
                })
            };
            view! { <span class="sm-icon-line" style=style></span> }
        })
        .collect_view();

    let list = if items.is_empty() {
        let placeholder_style = move || {
            controller.with(|menu| menu.scene().item_labels.first().map(Visual::motion_style).unwrap_or_default())
        };
        Either::Left(view! {
            <li class="sm-panel-itemWrap" aria-hidden="true">
                <span class="sm-panel-item">
                    <span class="sm-panel-itemLabel" style=placeholder_style>"No items"</span>
                </span>
            </li>
        })
    } else {
        Either::Right(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    let label_style = move || {
                        controller.with(|menu| {
                            menu.scene().item_labels.get(index).map(Visual::motion_style).unwrap_or_default()
                        })
                    };
                    let number_style = move || {
                        controller.with(|menu| {
                            menu.scene().item_numbers.get(index).map(Visual::motion_style).unwrap_or_default()
                        })
                    };
                    let label = view! {
                        <span class="sm-panel-itemLabel" style=label_style>{item.label.clone()}</span>
                        {numbered.then(|| view! {
                            <span class="sm-panel-itemNumber" style=number_style aria-hidden="true">
                                {format_ordinal(index)}
                            </span>
                        })}
                    };

                    let aria_label = item.aria_label.clone();
                    let entry = if item.target().is_external() {
                        let href = item.link.clone();
                        Either::Left(view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="sm-panel-item"
                                aria-label=aria_label
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    navigate(&item);
                                }
                            >
                                {label}
                            </a>
                        })
                    } else {
                        Either::Right(view! {
                            <button
                                type="button"
                                class="sm-panel-item"
                                aria-label=aria_label
                                on:click=move |_| navigate(&item)
                            >
                                {label}
                            </button>
                        })
                    };
                    view! { <li class="sm-panel-itemWrap">{entry}</li> }
                })
                .collect_view(),
        )
    };

    let socials = layout.has_socials().then(|| {
        let title_style = move || {
            controller.with(|menu| menu.scene().social_title.as_ref().map(Visual::motion_style).unwrap_or_default())
        };
        let links = social_items
            .into_iter()
            .enumerate()
            .map(|(index, social)| {
                let style = move || {
                    controller.with(|menu| {
                        menu.scene().social_links.get(index).map(Visual::motion_style).unwrap_or_default()
                    })
                };
                view! {
                    <li class="sm-socials-item">
                        <a
                            href=social.link
                            target="_blank"
                            rel="noopener noreferrer"
                            class="sm-socials-link"
                            aria-label=social.label
                            style=style
                        >
                            <Icon kind=social.icon class="sm-socials-icon"/>
                        </a>
                    </li>
                }
            })
            .collect_view();

        view! {
            <div class="sm-socials" aria-label="Social links">
                <h3 class="sm-socials-title" style=title_style>"Follow Us"</h3>
                <ul class="sm-socials-list" role="list">{links}</ul>
            </div>
        }
    });

    view! {
        <div
            node_ref=root_ref
            class=root_class(&options, class.as_deref())
            data-position=options.position.as_str()
            data-open=move || is_open().then_some("true")
            style=accent_style(&options.accent_color)
        >
            <div class="sm-prelayers" aria-hidden="true">{backdrops}</div>

            <button
                type="button"
                class="sm-toggle"
                aria-label=move || toggle_label(is_open())
                aria-expanded=move || is_open().to_string()
                aria-controls=MENU_PANEL_ID
                style=move || controller.with(|menu| button_style(&menu.scene().toggle_button, &menu.palette()))
                on:click=move |_| toggle()
            >
                <span class="sm-icon" aria-hidden="true">{bars}</span>
            </button>

            <aside
                id=MENU_PANEL_ID
                class=panel_class(options.position)
                style=move || controller.with(|menu| menu.scene().panel.style_with_display("flex"))
                aria-hidden=move || (!controller.with(|menu| menu.scene().panel_displayed())).to_string()
            >
                <button type="button" class="sm-panel-close" aria-label="Close menu" on:click=move |_| toggle()>
                    "×"
                </button>
                <div class="sm-panel-inner">
                    <ul class="sm-panel-list" role="list" data-numbering=numbered.then_some("true")>
                        {list}
                    </ul>
                    {socials}
                </div>
            </aside>
        </div>
    }
}

/// Scene layout for the rendered menu. An empty item list still renders the
/// "No items" placeholder, which reveals like a single unnumbered item.
fn menu_layout(options: &MenuOptions, items: usize, socials: usize) -> SceneLayout {
    let mut layout = SceneLayout::new(options, items.max(1), socials);
    if items == 0 {
        layout.numbered = false;
    }
    layout
}

/// `Some(inside)` when both the menu root and the event target are known.
fn event_inside(root: NodeRef<html::Div>, event: &web_sys::MouseEvent) -> Option<bool> {
    let root = root.get_untracked()?;
    let target = event.target()?.dyn_into::<web_sys::Node>().ok()?;
    Some(root.contains(Some(&target)))
}

fn root_class(options: &MenuOptions, extra: Option<&str>) -> String {
    let mut class = format!(
        "sm-scope {} sm-{}",
        if options.is_fixed { "sm-fixed" } else { "sm-absolute" },
        options.position.as_str()
    );
    if let Some(extra) = extra.map(str::trim).filter(|extra| !extra.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

fn panel_class(edge: DockEdge) -> String {
    format!("staggered-menu-panel sm-panel-{}", edge.as_str())
}

fn toggle_label(open: bool) -> &'static str {
    if open {
        "Close menu"
    } else {
        "Open menu"
    }
}

fn button_style(visual: &Visual, palette: &ButtonPalette) -> String {
    format!("background: {}; {}", palette.background_css(), visual.motion_style())
}

fn bar_style(visual: &Visual, palette: &ButtonPalette) -> String {
    format!("background: {}; {}", palette.bar, visual.motion_style())
}

fn backdrop_style(color: &str, visual: &Visual) -> String {
    format!("background: {}; {}", color, visual.style())
}
