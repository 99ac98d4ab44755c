use contracts::enums::{ModuleKind, Page};
use contracts::shared::StoreKey;
use contracts::system::{FavoriteKey, RecentlyViewedEntry};
use leptos::prelude::*;

use super::super::catalog::movies;
use crate::layout::global_context::use_app;
use crate::shared::format::format_rating;
use crate::shared::icons::icon;
use crate::domain::a001_travel::generator::seed::format_duration;
use crate::shared::ui::PageHeader;

#[component]
#[allow(non_snake_case)]
pub fn TicketsHome() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="page">
            <PageHeader title="Movies" subtitle="Now showing" hide_back=true />
            <div class="grid">
                {movies().iter().map(|movie| {
                    let key = FavoriteKey::new("movie", &movie.id);
                    let toggle_key = key.clone();
                    let open = move |_| {
                        app.select(StoreKey::SelectedMovie, movie);
                        app.add_recently_viewed(
                            RecentlyViewedEntry::new(movie.id.clone(), ModuleKind::Tickets, movie.title.clone())
                                .with_subtitle(movie.language.clone()),
                        );
                        app.navigate(Page::TicketsShows);
                    };
                    view! {
                        <div class="card movie-card">
                            <div class="movie-card__head">
                                <div class="movie-card__title">{movie.title.clone()}</div>
                                <button
                                    class=move || if app.is_favorite(&key) { "fav fav--on" } else { "fav" }
                                    on:click=move |_| { app.toggle_favorite(&toggle_key); }
                                >
                                    {icon("heart")}
                                </button>
                            </div>
                            <div class="muted">
                                {format!("{} · {} · {}", movie.certificate, movie.language, movie.genre)}
                            </div>
                            <div class="movie-card__meta">
                                {format!("{} · {}", format_rating(movie.rating), format_duration(movie.duration_minutes))}
                            </div>
                            <button class="button button--primary" on:click=open>"Book tickets"</button>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
