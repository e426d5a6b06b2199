use crate::api::{ApiClient, ApiError, Violation};
use crate::pages::civil_home::{repository, utils::ViolationFilter};
use leptos::*;

#[derive(Clone, Copy)]
pub struct CivilHomeViewModel {
    pub violations_resource: Resource<u32, Result<Vec<Violation>, ApiError>>,
    pub filter: RwSignal<ViolationFilter>,
    pub pay_action: Action<String, Result<Violation, ApiError>>,
    pub pay_message: RwSignal<Option<ApiError>>,
    reload: RwSignal<u32>,
}

impl CivilHomeViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let reload = create_rw_signal(0u32);
        let filter = create_rw_signal(ViolationFilter::default());

        let api_clone = api.clone();
        let violations_resource = create_resource(
            move || reload.get(),
            move |_| {
                let api = api_clone.clone();
                async move { repository::fetch_violations(&api).await }
            },
        );

        let pay_action = create_action(move |violation_id: &String| {
            let api = api.clone();
            let violation_id = violation_id.clone();
            async move { repository::pay_violation(&api, &violation_id).await }
        });

        let pay_message = create_rw_signal(None);

        // The paid flag shown to the user always comes from the backend:
        // a successful payment triggers a refetch of the whole list instead
        // of patching the row in place.
        create_effect(move |_| {
            if let Some(result) = pay_action.value().get() {
                match result {
                    Ok(_) => {
                        pay_message.set(None);
                        reload.update(|n| *n += 1);
                    }
                    Err(err) => pay_message.set(Some(err)),
                }
            }
        });

        Self {
            violations_resource,
            filter,
            pay_action,
            pay_message,
            reload,
        }
    }

    pub fn handle_pay(&self, violation_id: String) {
        if self.pay_action.pending().get_untracked() {
            return;
        }
        self.pay_message.set(None);
        self.pay_action.dispatch(violation_id);
    }

    pub fn refetch(&self) {
        self.reload.update(|n| *n += 1);
    }
}

pub fn use_civil_home_view_model() -> CivilHomeViewModel {
    match use_context::<CivilHomeViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = CivilHomeViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
