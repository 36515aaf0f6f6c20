use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::TourCard;
use crate::hooks::{use_auth, use_tours};
use crate::models::Tour;

#[derive(Properties, PartialEq)]
struct TourEditorProps {
    tour: Tour,
    heading: AttrValue,
    on_save: Callback<Tour>,
    on_cancel: Callback<()>,
}

/// Inline form for the fields a card displays. Used for both new and
/// existing tours; destinations are carried over untouched.
#[function_component(TourEditor)]
fn tour_editor(props: &TourEditorProps) -> Html {
    let title_ref = use_node_ref();
    let description_ref = use_node_ref();
    let image_ref = use_node_ref();
    let duration_ref = use_node_ref();
    let start_date_ref = use_node_ref();
    let price_ref = use_node_ref();

    let on_submit = {
        let refs = (
            title_ref.clone(),
            description_ref.clone(),
            image_ref.clone(),
            duration_ref.clone(),
            start_date_ref.clone(),
            price_ref.clone(),
        );
        let tour = props.tour.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let read = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value().trim().to_string())
                    .filter(|value| !value.is_empty())
            };
            on_save.emit(Tour {
                title: read(&refs.0),
                description: read(&refs.1),
                image_link: read(&refs.2),
                duration: read(&refs.3),
                start_date: read(&refs.4),
                price: read(&refs.5),
                ..tour.clone()
            });
        })
    };

    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());
    let value = |field: &Option<String>| field.clone().unwrap_or_default();
    let t = &props.tour;

    html! {
        <form class="card card-body mb-3" onsubmit={on_submit}>
            <h2 class="h5">{props.heading.clone()}</h2>
            <input ref={title_ref} class="form-control mb-2" placeholder="Title" value={value(&t.title)} />
            <input ref={description_ref} class="form-control mb-2" placeholder="Description" value={value(&t.description)} />
            <input ref={image_ref} class="form-control mb-2" placeholder="Image link" value={value(&t.image_link)} />
            <input ref={duration_ref} class="form-control mb-2" placeholder="Duration" value={value(&t.duration)} />
            <input ref={start_date_ref} class="form-control mb-2" type="date" value={value(&t.start_date)} />
            <input ref={price_ref} class="form-control mb-2" placeholder="Price" value={value(&t.price)} />
            <div class="d-flex gap-2">
                <button type="submit" class="btn btn-primary">{"Save"}</button>
                <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
            </div>
        </form>
    }
}

#[function_component(AdminView)]
pub fn admin_view() -> Html {
    let auth = use_auth();
    let tours = use_tours();
    let creating = use_state(|| false);
    let search_ref = use_node_ref();

    let on_save = {
        let update = tours.update.clone();
        let deselect = tours.deselect.clone();
        Callback::from(move |tour: Tour| {
            update.emit(tour);
            deselect.emit(());
        })
    };

    let on_create = {
        let creating = creating.clone();
        let create = tours.create.clone();
        Callback::from(move |tour: Tour| {
            create.emit(tour);
            creating.set(false);
        })
    };

    let open_create = {
        let creating = creating.clone();
        Callback::from(move |_: MouseEvent| creating.set(true))
    };

    let close_create = {
        let creating = creating.clone();
        Callback::from(move |_: ()| creating.set(false))
    };

    let on_search = {
        let search_ref = search_ref.clone();
        let search = tours.search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let title = search_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            search.emit(title);
        })
    };

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = auth.logout(&auth.navigator()) {
                log::warn!("⚠️ Logout left storage behind: {}", e);
            }
        })
    };

    let on_reload = tours.reload.reform(|_: MouseEvent| ());
    let state = &*tours.state;

    html! {
        <div class="container py-4">
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h1 class="h3">{"Tours"}</h1>
                <div class="d-flex gap-2">
                    <button class="btn btn-primary" onclick={open_create} disabled={*creating}>{"New tour"}</button>
                    <button class="btn btn-outline-primary" onclick={on_reload} disabled={state.loading}>{"Refresh"}</button>
                    <button class="btn btn-outline-secondary" onclick={on_logout}>{"Log out"}</button>
                </div>
            </div>
            <form class="d-flex gap-2 mb-3" onsubmit={on_search}>
                <input ref={search_ref} class="form-control" type="search" placeholder="Search by title" />
                <button type="submit" class="btn btn-outline-primary" disabled={state.loading}>{"Search"}</button>
            </form>
            if let Some(message) = state.error.clone() {
                <div class="alert alert-danger">{message}</div>
            }
            if let Some(message) = state.notice.clone() {
                <div class="alert alert-success">{message}</div>
            }
            if *creating {
                <TourEditor tour={Tour::default()} heading="New tour" on_save={on_create} on_cancel={close_create} />
            }
            if let Some(tour) = state.selected.clone() {
                <TourEditor tour={tour} heading="Edit tour" on_save={on_save} on_cancel={tours.deselect.clone()} />
            }
            { for state.tours.iter().map(|tour| html! {
                <TourCard
                    tour={Some(tour.clone())}
                    on_update={Some(tours.select.clone())}
                    on_delete={Some(tours.delete.clone())}
                />
            }) }
        </div>
    }
}
