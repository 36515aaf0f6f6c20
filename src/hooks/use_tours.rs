use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::Tour;
use crate::services::{ApiClient, BrowserSessionStore, TourService};

type AppTourService = TourService<ApiClient, BrowserSessionStore>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToursState {
    pub tours: Vec<Tour>,
    pub loading: bool,
    pub error: Option<String>,
    /// Last confirmation from the server
    pub notice: Option<String>,
    /// Full tour opened for editing
    pub selected: Option<Tour>,
}

pub enum ToursAction {
    Loading,
    Loaded(Vec<Tour>),
    Failed(String),
    Notice(String),
    Selected(Option<Tour>),
}

impl Reducible for ToursState {
    type Action = ToursAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToursAction::Loading => {
                next.loading = true;
                next.error = None;
            }
            ToursAction::Loaded(tours) => {
                next.tours = tours;
                next.loading = false;
            }
            ToursAction::Failed(message) => {
                next.loading = false;
                next.error = Some(message);
            }
            ToursAction::Notice(message) => next.notice = Some(message),
            ToursAction::Selected(tour) => next.selected = tour,
        }
        Rc::new(next)
    }
}

pub struct UseToursHandle {
    pub state: UseReducerHandle<ToursState>,
    pub reload: Callback<()>,
    /// Blank title reloads the whole list
    pub search: Callback<String>,
    pub select: Callback<i64>,
    pub deselect: Callback<()>,
    pub create: Callback<Tour>,
    pub update: Callback<Tour>,
    pub delete: Callback<i64>,
}

fn spawn_reload(service: Rc<AppTourService>, dispatch: UseReducerDispatcher<ToursState>) {
    dispatch.dispatch(ToursAction::Loading);
    wasm_bindgen_futures::spawn_local(async move {
        match service.list_tours().await {
            Ok(tours) => dispatch.dispatch(ToursAction::Loaded(tours)),
            Err(e) => {
                log::error!("❌ Could not load tours: {}", e);
                dispatch.dispatch(ToursAction::Failed(e.to_string()));
            }
        }
    });
}

#[hook]
pub fn use_tours() -> UseToursHandle {
    let state = use_reducer(ToursState::default);
    let service = use_memo((), |_| {
        TourService::new(
            Rc::new(ApiClient::new()),
            Rc::new(BrowserSessionStore::new(CONFIG.session_max_age_seconds)),
        )
    });

    let reload = {
        let service = service.clone();
        let dispatch = state.dispatcher();
        Callback::from(move |_| spawn_reload(service.clone(), dispatch.clone()))
    };

    // Load on mount
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let search = {
        let service = service.clone();
        let dispatch = state.dispatcher();
        Callback::from(move |title: String| {
            let service = service.clone();
            let dispatch = dispatch.clone();
            dispatch.dispatch(ToursAction::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match service.tours_by_title(&title).await {
                    Ok(tours) => dispatch.dispatch(ToursAction::Loaded(tours)),
                    Err(e) => report(&dispatch, "search", e),
                }
            });
        })
    };

    let select = {
        let service = service.clone();
        let dispatch = state.dispatcher();
        Callback::from(move |tour_id: i64| {
            let service = service.clone();
            let dispatch = dispatch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match service.tour_by_id(tour_id).await {
                    Ok(tour) => dispatch.dispatch(ToursAction::Selected(Some(tour))),
                    Err(e) => report(&dispatch, "lookup", e),
                }
            });
        })
    };

    let deselect = {
        let dispatch = state.dispatcher();
        Callback::from(move |_: ()| dispatch.dispatch(ToursAction::Selected(None)))
    };

    let create = {
        let service = service.clone();
        let dispatch = state.dispatcher();
        Callback::from(move |tour: Tour| {
            let service = service.clone();
            let dispatch = dispatch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match service.create_tour(&tour).await {
                    Ok(reply) => {
                        dispatch.dispatch(ToursAction::Notice(reply.message));
                        spawn_reload(service, dispatch);
                    }
                    Err(e) => report(&dispatch, "create", e),
                }
            });
        })
    };

    let update = {
        let service = service.clone();
        let dispatch = state.dispatcher();
        Callback::from(move |tour: Tour| {
            let Some(tour_id) = tour.tour_id else {
                dispatch.dispatch(ToursAction::Failed("this tour has no id".to_string()));
                return;
            };
            let service = service.clone();
            let dispatch = dispatch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match service.update_tour(tour_id, &tour).await {
                    Ok(reply) => {
                        dispatch.dispatch(ToursAction::Notice(reply.message));
                        spawn_reload(service, dispatch);
                    }
                    Err(e) => report(&dispatch, "update", e),
                }
            });
        })
    };

    let delete = {
        let service = service.clone();
        let dispatch = state.dispatcher();
        Callback::from(move |tour_id: i64| {
            let service = service.clone();
            let dispatch = dispatch.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match service.delete_tour(tour_id).await {
                    Ok(reply) => {
                        dispatch.dispatch(ToursAction::Notice(reply.message));
                        spawn_reload(service, dispatch);
                    }
                    Err(e) => report(&dispatch, "delete", e),
                }
            });
        })
    };

    UseToursHandle {
        state,
        reload,
        search,
        select,
        deselect,
        create,
        update,
        delete,
    }
}

fn report(dispatch: &UseReducerDispatcher<ToursState>, action: &str, error: AppError) {
    log::error!("❌ Tour {} failed: {}", action, error);
    dispatch.dispatch(ToursAction::Failed(error.to_string()));
}
