use contracts::domain::a003_tickets::{Movie, SelectedShow, Show};
use contracts::enums::Page;
use contracts::shared::StoreKey;
use leptos::prelude::*;

use super::super::catalog::shows_for;
use crate::layout::global_context::use_app;
use crate::shared::format::format_inr;
use crate::shared::ui::{EmptyState, PageHeader};

#[component]
#[allow(non_snake_case)]
pub fn TicketsShows() -> impl IntoView {
    let app = use_app();
    let Some(movie) = app.selection::<Movie>(StoreKey::SelectedMovie) else {
        return view! {
            <div class="page">
                <PageHeader title="Showtimes" />
                <EmptyState message="Pick a movie first" action=(Page::TicketsHome, "Browse movies") />
            </div>
        }
        .into_any();
    };

    // group consecutive shows by theatre; shows_for lists them theatre by theatre
    let mut theatres: Vec<(String, Vec<Show>)> = Vec::new();
    for show in shows_for(&movie.id) {
        if theatres.last().map_or(true, |(name, _)| *name != show.theatre) {
            theatres.push((show.theatre.clone(), Vec::new()));
        }
        if let Some((_, list)) = theatres.last_mut() {
            list.push(show);
        }
    }

    let title = movie.title.clone();
    let groups = theatres
        .into_iter()
        .map(|(theatre, shows)| {
            view! {
                <div class="card theatre">
                    <div class="theatre__name">{theatre}</div>
                    <div class="chips">
                        {shows.into_iter().map(|show| {
                            let label = format!("{} · {}", show.start_time, format_inr(show.price_per_seat));
                            let movie_title = title.clone();
                            view! {
                                <button class="chip" on:click=move |_| {
                                    app.select(StoreKey::SelectedShow, &SelectedShow::new(show.clone(), movie_title.clone()));
                                    app.navigate(Page::TicketsSeats);
                                }>
                                    {label}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <PageHeader title=movie.title.clone() subtitle=format!("{} · {}", movie.language, movie.genre) />
            {groups}
        </div>
    }
    .into_any()
}
