use contracts::domain::common::Offer;
use contracts::enums::{ModuleKind, Page};
use contracts::shared::StoreKey;
use contracts::system::RecentlyViewedEntry;
use leptos::prelude::*;
use std::time::Duration;

use crate::domain::a002_food::catalog::restaurant;
use crate::domain::a003_tickets::catalog::movie_by_id;
use crate::domain::a004_shopping::catalog::product_by_id;
use crate::layout::global_context::{use_app, AppContext};
use crate::shared::format::format_inr;
use crate::shared::icons::{icon, module_icon};

/// One hero slide; `gradient` is the token the header re-themes with
struct Slide {
    title: &'static str,
    caption: &'static str,
    gradient: &'static str,
    page: Page,
}

static SLIDES: [Slide; 4] = [
    Slide {
        title: "Fly to Goa this weekend",
        caption: "Fares from ₹2,499 with FLYHIGH",
        gradient: "sunset-orange",
        page: Page::TravelHome,
    },
    Slide {
        title: "50% off your first meal",
        caption: "Use WELCOME50 on orders above ₹199",
        gradient: "berry-pink",
        page: Page::FoodHome,
    },
    Slide {
        title: "Blockbusters now showing",
        caption: "20% off tickets with MOVIE20",
        gradient: "night-indigo",
        page: Page::TicketsHome,
    },
    Slide {
        title: "Big brand savings",
        caption: "Extra 15% off with SHOP15",
        gradient: "cyan-teal",
        page: Page::ShoppingHome,
    },
];

const SLIDE_INTERVAL: Duration = Duration::from_secs(5);

/// Reopens the detail view of a recently viewed entry when its record is
/// still in a catalog, else the module's landing page
fn reopen(app: AppContext, entry: &RecentlyViewedEntry) {
    match entry.module {
        ModuleKind::Food => {
            if let Some(r) = restaurant(&entry.id) {
                app.select(StoreKey::SelectedRestaurant, r);
                app.navigate(Page::FoodMenu);
                return;
            }
        }
        ModuleKind::Tickets => {
            if let Some(m) = movie_by_id(&entry.id) {
                app.select(StoreKey::SelectedMovie, m);
                app.navigate(Page::TicketsShows);
                return;
            }
        }
        ModuleKind::Shopping => {
            if let Some(p) = product_by_id(&entry.id) {
                app.select(StoreKey::SelectedProduct, p);
                app.navigate(Page::ShoppingDetails);
                return;
            }
        }
        _ => {}
    }
    app.navigate(Page::module_home(entry.module));
}

#[component]
fn HeroCarousel() -> impl IntoView {
    let app = use_app();
    let current = RwSignal::new(0usize);

    let show = move |index: usize| {
        let index = index % SLIDES.len();
        current.set(index);
        app.publish_hero_gradient(SLIDES[index].gradient);
    };
    show(0);

    match set_interval_with_handle(move || show(current.get_untracked() + 1), SLIDE_INTERVAL) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("hero carousel timer not started: {:?}", e),
    }

    view! {
        <div class=move || format!("hero hero--{}", SLIDES[current.get()].gradient)>
            {move || {
                let slide = &SLIDES[current.get()];
                let page = slide.page;
                view! {
                    <div class="hero__title">{slide.title}</div>
                    <div class="hero__caption">{slide.caption}</div>
                    <button class="button button--light" on:click=move |_| app.navigate(page)>"Explore"</button>
                }
            }}
            <div class="hero__dots">
                {(0..SLIDES.len()).map(|i| view! {
                    <button
                        class=move || if current.get() == i { "dot dot--active" } else { "dot" }
                        on:click=move |_| show(i)
                    ></button>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn HomePage() -> impl IntoView {
    let app = use_app();
    let recently_viewed = move || app.session.with(|s| s.recently_viewed.clone());
    let greeting = move || {
        app.session.with(|s| match &s.user {
            Some(user) => format!("Hi {}, what's next?", user.first_name()),
            None => "What would you like to do today?".to_string(),
        })
    };

    view! {
        <div class="page home">
            <h1 class="home__greeting">{greeting}</h1>
            <HeroCarousel />

            <div class="module-tiles">
                {ModuleKind::all().into_iter().map(|module| view! {
                    <button class="module-tile" on:click=move |_| app.navigate(Page::module_home(module))>
                        {icon(module_icon(module))}
                        <span>{module.display_name()}</span>
                    </button>
                }).collect_view()}
            </div>

            <h2 class="section-title">"Offers for you"</h2>
            <div class="offers">
                {Offer::all().iter().map(|offer| view! {
                    <div class="card offer">
                        <div class="offer__code">{offer.code}</div>
                        <div>{offer.title}</div>
                        <div class="muted">{format!(
                            "{}% off up to {}{}",
                            offer.percent,
                            format_inr(offer.max_discount),
                            if offer.min_order > 0.0 { format!(" on {}+", format_inr(offer.min_order)) } else { String::new() }
                        )}</div>
                    </div>
                }).collect_view()}
            </div>

            {move || {
                let entries = recently_viewed();
                (!entries.is_empty()).then(|| view! {
                    <h2 class="section-title">"Recently viewed"</h2>
                    <div class="chips">
                        {entries.into_iter().map(|entry| {
                            let label = match &entry.subtitle {
                                Some(sub) => format!("{} · {}", entry.title, sub),
                                None => entry.title.clone(),
                            };
                            view! {
                                <button class="chip" on:click=move |_| reopen(app, &entry)>{label}</button>
                            }
                        }).collect_view()}
                    </div>
                })
            }}
        </div>
    }
}
