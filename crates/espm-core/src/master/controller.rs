//! Master list coordinator.
//!
//! Reacts to lifecycle and user events of the supplier master page and drives
//! the bound list, the view models, and the host's navigation. Rendering,
//! routing, and history live in the host behind [`MasterHost`].

use tracing::debug;

use super::dialog::{template_dialog, DialogDescription};
use super::list::{ListFilter, ListLoadOutcome, ListMode, SortKey, Sorter, SupplierList};
use super::texts::{
    TextBundle, MASTER_FILTER_BAR_TEXT, MASTER_LIST_NO_DATA_TEXT,
    MASTER_LIST_NO_DATA_WITH_FILTER_OR_SEARCH_TEXT, MASTER_TITLE_COUNT, WARNING, WARNING_CONFIRM,
};
use super::view_model::{AppViewModel, MasterViewModel};
use crate::cards::CardRegistry;
use crate::config::validate_template_id;
use crate::error::Result;
use crate::selection::ListSelector;
use crate::sync::{CardSyncEngine, Notifier, SyncReport, SyncResult};

/// Shell hash of the launchpad home page.
pub const LAUNCHPAD_HOME: &str = "#Shell-home";

/// Router targets displayed without changing the hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Create,
    DetailNoObjectsAvailable,
}

/// Services the hosting presentation layer provides.
pub trait MasterHost {
    /// Navigate to the supplier detail route.
    fn nav_to_object(&mut self, supplier_id: &str, replace: bool);
    fn display_target(&mut self, target: Target);
    fn has_previous_history(&self) -> bool;
    fn history_back(&mut self);
    fn navigate_external(&mut self, shell_hash: &str);
    /// Ask an OK/Cancel question; `true` means OK.
    fn confirm(&mut self, title: &str, question: &str) -> bool;
    /// Whether the detail page holds unsaved edits.
    fn has_pending_changes(&self) -> bool;
    fn reset_changes(&mut self);
    fn is_phone(&self) -> bool;
}

#[derive(Debug, Clone, Default)]
struct ListFilterState {
    search: Vec<ListFilter>,
    filter: Vec<ListFilter>,
}

pub struct MasterController<H> {
    host: H,
    texts: Box<dyn TextBundle>,
    list: SupplierList,
    view: MasterViewModel,
    app: AppViewModel,
    filter_state: ListFilterState,
    original_busy_delay: u32,
    busy_delay_restored: bool,
    template_dialog_open: bool,
}

impl<H: MasterHost> MasterController<H> {
    /// Set up the view model for a freshly bound list.
    pub fn new(list: SupplierList, host: H, texts: Box<dyn TextBundle>) -> Self {
        let view = MasterViewModel::new(
            texts.text(MASTER_TITLE_COUNT, &["0".to_string()]),
            texts.text(MASTER_LIST_NO_DATA_TEXT, &[]),
        );
        let original_busy_delay = list.busy_indicator_delay();
        Self {
            host,
            texts,
            list,
            view,
            app: AppViewModel::default(),
            filter_state: ListFilterState::default(),
            original_busy_delay,
            busy_delay_restored: false,
            template_dialog_open: false,
        }
    }

    pub const fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub const fn list(&self) -> &SupplierList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut SupplierList {
        &mut self.list
    }

    pub const fn view(&self) -> &MasterViewModel {
        &self.view
    }

    pub const fn app(&self) -> &AppViewModel {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut AppViewModel {
        &mut self.app
    }

    pub const fn is_template_dialog_open(&self) -> bool {
        self.template_dialog_open
    }

    /// The list finished loading `total` items.
    pub fn on_update_finished(&mut self, total: usize) {
        if !self.busy_delay_restored {
            self.view.delay = self.original_busy_delay;
            self.busy_delay_restored = true;
        }
        self.update_list_item_count(total);
        self.find_item();
        self.app.add_enabled = true;
    }

    /// Apply a search on supplier names, or refresh when the search field's
    /// refresh button was pressed.
    pub fn on_search(&mut self, query: Option<&str>, refresh_pressed: bool) {
        if refresh_pressed {
            self.on_refresh();
            return;
        }

        self.filter_state.search = query
            .map(str::trim)
            .filter(|query| !query.is_empty())
            .map(|query| vec![ListFilter::NameContains(query.to_string())])
            .unwrap_or_default();
        self.apply_filter_search();
    }

    /// Refresh the binding, keeping filter and sort state.
    pub fn on_refresh(&mut self) {
        self.list.refresh();
    }

    pub fn on_sort(&mut self, key: SortKey) {
        self.view.sort_by = key;
        self.list.sort(Sorter::ascending(key));
    }

    /// Set or clear the filter-bar filter, labelled with `label`.
    pub fn on_filter(&mut self, filter: Option<ListFilter>, label: &str) {
        self.filter_state.filter = filter.into_iter().collect();
        self.apply_filter_search();
        self.update_filter_bar(label);
    }

    /// A list item was selected; returns whether the detail page was shown.
    pub fn on_selection_change(&mut self, path: &str) -> bool {
        let navigated = if self.host.has_pending_changes() {
            let question = self.texts.text(WARNING_CONFIRM, &[]);
            let title = self.texts.text(WARNING, &[]);
            if self.host.confirm(&title, &question) {
                self.host.reset_changes();
                self.select_and_show(path)
            } else {
                false
            }
        } else {
            self.select_and_show(path)
        };
        self.app.add_enabled = true;
        navigated
    }

    /// No route matched: drop the list selection.
    pub fn on_bypassed(&mut self) {
        self.list.remove_selections();
    }

    pub fn on_nav_back(&mut self) {
        if self.host.has_previous_history() {
            self.host.history_back();
        } else {
            self.host.navigate_external(LAUNCHPAD_HOME);
        }
    }

    pub fn on_add(&mut self) {
        self.app.add_enabled = false;
        self.host.display_target(Target::Create);
    }

    /// The master route matched with an empty hash.
    pub fn on_master_matched(&mut self) {
        match self.list.loading_outcome() {
            ListLoadOutcome::Loaded { first_item_path } => {
                if self.list.mode() == ListMode::None {
                    return;
                }
                self.app.add_enabled = true;
                if self.list.selected_item().is_none() {
                    if let Some(supplier_id) = self.supplier_id_at(&first_item_path) {
                        self.host.nav_to_object(&encode_id(&supplier_id), true);
                    }
                }
            }
            ListLoadOutcome::NoItems => self.host.display_target(Target::DetailNoObjectsAvailable),
            ListLoadOutcome::Failed => {}
        }
    }

    /// Show the detail page of the item at `path`.
    ///
    /// Phones keep a history entry per item; larger screens replace it.
    pub fn show_detail(&mut self, path: &str) -> bool {
        let Some(supplier_id) = self.supplier_id_at(path) else {
            debug!(path, "No list item to show");
            return false;
        };
        let replace = !self.host.is_phone();
        self.host.nav_to_object(&encode_id(&supplier_id), replace);
        true
    }

    /// Card selector reflecting the suppliers checked in the list.
    pub fn card_selector(&self) -> ListSelector {
        ListSelector::from_suppliers(self.list.checked_suppliers())
    }

    pub async fn on_sync<R: CardRegistry>(
        &mut self,
        engine: &CardSyncEngine<R>,
        username: &str,
        notifier: &dyn Notifier,
    ) -> SyncResult<SyncReport> {
        let selector = self.card_selector();
        engine
            .run_sync(username, &selector, &mut self.view, notifier)
            .await
    }

    pub async fn on_delete_all_cards<R: CardRegistry>(
        &mut self,
        engine: &CardSyncEngine<R>,
        username: &str,
        notifier: &dyn Notifier,
    ) -> SyncResult<()> {
        engine.run_delete_all(username, &mut self.view, notifier).await
    }

    pub fn open_template_dialog(&mut self) -> DialogDescription {
        self.template_dialog_open = true;
        template_dialog()
    }

    pub fn on_template_cancel(&mut self) {
        self.template_dialog_open = false;
    }

    /// Close the dialog, switch the engine to `template_id`, then sync.
    pub async fn on_template_save<R: CardRegistry>(
        &mut self,
        engine: &mut CardSyncEngine<R>,
        template_id: &str,
        username: &str,
        notifier: &dyn Notifier,
    ) -> Result<SyncReport> {
        self.template_dialog_open = false;
        let template_name = validate_template_id(template_id)?;
        engine.set_template_name(template_name);
        Ok(self.on_sync(engine, username, notifier).await?)
    }

    fn select_and_show(&mut self, path: &str) -> bool {
        self.list.select(path);
        self.show_detail(path)
    }

    fn supplier_id_at(&self, path: &str) -> Option<String> {
        self.list
            .find_item(path)
            .map(|supplier| supplier.supplier_id.to_string())
    }

    fn update_list_item_count(&mut self, total: usize) {
        if self.list.is_length_final() {
            self.view.title = self.texts.text(MASTER_TITLE_COUNT, &[total.to_string()]);
        }
    }

    fn apply_filter_search(&mut self) {
        let filters = self
            .filter_state
            .search
            .iter()
            .chain(&self.filter_state.filter)
            .cloned()
            .collect::<Vec<_>>();
        let has_filters = !filters.is_empty();
        self.list.filter(filters);

        let key = if has_filters {
            MASTER_LIST_NO_DATA_WITH_FILTER_OR_SEARCH_TEXT
        } else {
            MASTER_LIST_NO_DATA_TEXT
        };
        self.view.no_data_text = self.texts.text(key, &[]);
    }

    fn update_filter_bar(&mut self, label: &str) {
        self.view.is_filter_bar_visible = !self.filter_state.filter.is_empty();
        self.view.filter_bar_label = self
            .texts
            .text(MASTER_FILTER_BAR_TEXT, &[label.to_string()]);
    }

    // Select `item_to_select` once the list is updated, falling back to the
    // first visible item when it is not on the current page.
    fn find_item(&mut self) {
        let Some(item_to_select) = self.app.item_to_select.clone() else {
            return;
        };
        let mut path = path_with_slash(&item_to_select);
        if self.list.find_item(&path).is_none() {
            match self.list.first_item() {
                Some(first) => path = first.binding_path(),
                None => {
                    self.host.display_target(Target::DetailNoObjectsAvailable);
                    return;
                }
            }
        }
        self.select_and_show(&path);
    }
}

/// Prefix a binding path with `/` unless it already starts with one.
pub fn path_with_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

fn encode_id(supplier_id: &str) -> String {
    urlencoding::encode(supplier_id).into_owned()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use url::Url;

    use super::*;
    use crate::cards::{RegistrationScope, RemoteCard};
    use crate::master::DefaultTexts;
    use crate::models::{CardParameters, Supplier, SupplierId};
    use crate::sync::{SyncSettings, DEFAULT_STAGGER, SYNC_SUCCESS_MESSAGE};

    #[derive(Default)]
    struct RecordingHost {
        navigations: Vec<(String, bool)>,
        targets: Vec<Target>,
        previous_history: bool,
        back_calls: usize,
        external: Vec<String>,
        confirm_answer: bool,
        questions: Vec<String>,
        pending_changes: bool,
        resets: usize,
        phone: bool,
    }

    impl MasterHost for RecordingHost {
        fn nav_to_object(&mut self, supplier_id: &str, replace: bool) {
            self.navigations.push((supplier_id.to_string(), replace));
        }

        fn display_target(&mut self, target: Target) {
            self.targets.push(target);
        }

        fn has_previous_history(&self) -> bool {
            self.previous_history
        }

        fn history_back(&mut self) {
            self.back_calls += 1;
        }

        fn navigate_external(&mut self, shell_hash: &str) {
            self.external.push(shell_hash.to_string());
        }

        fn confirm(&mut self, _title: &str, question: &str) -> bool {
            self.questions.push(question.to_string());
            self.confirm_answer
        }

        fn has_pending_changes(&self) -> bool {
            self.pending_changes
        }

        fn reset_changes(&mut self) {
            self.resets += 1;
            self.pending_changes = false;
        }

        fn is_phone(&self) -> bool {
            self.phone
        }
    }

    #[derive(Default)]
    struct StubRegistry {
        remote: Vec<CardParameters>,
        requests: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CardRegistry for StubRegistry {
        async fn list(&self, scope: &RegistrationScope) -> SyncResult<Vec<RemoteCard>> {
            self.requests
                .lock()
                .unwrap()
                .push(format!("LIST {}", scope.template_name));
            Ok(self.remote.iter().cloned().map(RemoteCard::new).collect())
        }

        async fn register(
            &self,
            _scope: &RegistrationScope,
            parameters: &CardParameters,
            _link: &str,
        ) -> SyncResult<()> {
            self.requests
                .lock()
                .unwrap()
                .push(format!("REGISTER {}", parameters["SupplierId"]));
            Ok(())
        }

        async fn delete(
            &self,
            _scope: &RegistrationScope,
            parameters: &CardParameters,
        ) -> SyncResult<()> {
            self.requests
                .lock()
                .unwrap()
                .push(format!("DELETE {}", parameters["SupplierId"]));
            Ok(())
        }

        async fn delete_all(&self, _scope: &RegistrationScope) -> SyncResult<()> {
            self.requests.lock().unwrap().push("DELETEALL".to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct Toasts(Mutex<Vec<String>>);

    impl Notifier for Toasts {
        fn show_toast(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    fn suppliers() -> Vec<Supplier> {
        vec![
            Supplier {
                country: Some("DE".to_string()),
                ..Supplier::new("100000001", "Becker Berlin")
            },
            Supplier {
                country: Some("US".to_string()),
                ..Supplier::new("100000002", "Panorama Studios")
            },
            Supplier::new("100000003", "Talpa"),
        ]
    }

    fn controller_with(host: RecordingHost) -> MasterController<RecordingHost> {
        let mut list = SupplierList::new(suppliers());
        list.set_busy_indicator_delay(1000);
        MasterController::new(list, host, Box::new(DefaultTexts::default()))
    }

    fn controller() -> MasterController<RecordingHost> {
        controller_with(RecordingHost::default())
    }

    fn engine(remote: &[&str]) -> CardSyncEngine<StubRegistry> {
        CardSyncEngine::new(
            StubRegistry {
                remote: remote
                    .iter()
                    .map(|id| Supplier::new(*id, "").card_parameters())
                    .collect(),
                ..StubRegistry::default()
            },
            SyncSettings {
                template_name: "ESPM".to_string(),
                app_url: Url::parse("https://espm.example.com/").unwrap(),
                stagger: DEFAULT_STAGGER,
            },
        )
    }

    #[test]
    fn init_sets_zero_count_title_and_default_texts() {
        let controller = controller();
        assert_eq!(controller.view().title, "Suppliers (0)");
        assert_eq!(
            controller.view().no_data_text,
            "No suppliers are currently available"
        );
        assert_eq!(controller.view().delay, 0);
        assert!(!controller.view().busy);
    }

    #[test]
    fn update_finished_counts_items_and_restores_delay_once() {
        let mut controller = controller();
        controller.app_mut().add_enabled = false;

        controller.on_update_finished(3);
        assert_eq!(controller.view().title, "Suppliers (3)");
        assert_eq!(controller.view().delay, 1000);
        assert!(controller.app().add_enabled);

        controller.list_mut().set_busy_indicator_delay(5);
        controller.on_update_finished(3);
        assert_eq!(controller.view().delay, 1000);
    }

    #[test]
    fn search_filters_names_and_switches_no_data_text() {
        let mut controller = controller();

        controller.on_search(Some("pano"), false);
        assert_eq!(controller.list().len(), 1);
        assert_eq!(controller.view().no_data_text, "No matching suppliers found");

        controller.on_search(Some("   "), false);
        assert_eq!(controller.list().len(), 3);
        assert_eq!(
            controller.view().no_data_text,
            "No suppliers are currently available"
        );
    }

    #[test]
    fn refresh_button_keeps_search_state() {
        let mut controller = controller();
        controller.on_search(Some("talpa"), false);

        controller.on_search(Some("ignored"), true);

        assert_eq!(controller.list().refresh_count(), 1);
        assert_eq!(controller.list().len(), 1);
    }

    #[test]
    fn filter_bar_tracks_filter_state() {
        let mut controller = controller();
        controller.on_filter(Some(ListFilter::CountryEquals("de".to_string())), "Germany");
        assert!(controller.view().is_filter_bar_visible);
        assert_eq!(controller.view().filter_bar_label, "Filtered by Germany");
        assert_eq!(controller.list().len(), 1);

        controller.on_filter(None, "");
        assert!(!controller.view().is_filter_bar_visible);
        assert_eq!(controller.list().len(), 3);
    }

    #[test]
    fn sort_records_key_and_reorders_list() {
        let mut controller = controller();
        controller.on_sort(SortKey::Country);
        assert_eq!(controller.view().sort_by, SortKey::Country);
        let first = controller.list().first_item().unwrap();
        assert_eq!(first.supplier_id, SupplierId::new("100000001"));
    }

    #[test]
    fn selection_without_pending_changes_navigates_with_replace() {
        let mut controller = controller();
        controller.app_mut().add_enabled = false;

        assert!(controller.on_selection_change("/Suppliers('100000002')"));

        assert_eq!(
            controller.host().navigations,
            vec![("100000002".to_string(), true)]
        );
        assert!(controller.app().add_enabled);
        assert_eq!(
            controller.list().selected_item().map(|s| s.supplier_name.as_str()),
            Some("Panorama Studios")
        );
    }

    #[test]
    fn selection_on_phone_keeps_history_entry() {
        let mut controller = controller_with(RecordingHost {
            phone: true,
            ..RecordingHost::default()
        });
        controller.on_selection_change("/Suppliers('100000001')");
        assert_eq!(
            controller.host().navigations,
            vec![("100000001".to_string(), false)]
        );
    }

    #[test]
    fn pending_changes_require_confirmation() {
        let mut declined = controller_with(RecordingHost {
            pending_changes: true,
            ..RecordingHost::default()
        });
        assert!(!declined.on_selection_change("/Suppliers('100000001')"));
        assert!(declined.host().navigations.is_empty());
        assert_eq!(declined.host().resets, 0);
        assert_eq!(
            declined.host().questions,
            vec!["Your entries will be lost when you leave this page.".to_string()]
        );

        let mut accepted = controller_with(RecordingHost {
            pending_changes: true,
            confirm_answer: true,
            ..RecordingHost::default()
        });
        assert!(accepted.on_selection_change("/Suppliers('100000001')"));
        assert_eq!(accepted.host().resets, 1);
        assert_eq!(accepted.host().navigations.len(), 1);
    }

    #[test]
    fn bypassed_clears_selection() {
        let mut controller = controller();
        controller.on_selection_change("/Suppliers('100000001')");
        controller.on_bypassed();
        assert_eq!(controller.list().selected_item(), None);
    }

    #[test]
    fn nav_back_uses_history_or_launchpad() {
        let mut with_history = controller_with(RecordingHost {
            previous_history: true,
            ..RecordingHost::default()
        });
        with_history.on_nav_back();
        assert_eq!(with_history.host().back_calls, 1);
        assert!(with_history.host().external.is_empty());

        let mut fresh = controller();
        fresh.on_nav_back();
        assert_eq!(fresh.host().external, vec![LAUNCHPAD_HOME.to_string()]);
    }

    #[test]
    fn add_disables_add_and_displays_create() {
        let mut controller = controller();
        controller.on_add();
        assert!(!controller.app().add_enabled);
        assert_eq!(controller.host().targets, vec![Target::Create]);
    }

    #[test]
    fn master_matched_navigates_to_first_item() {
        let mut controller = controller();
        controller.on_master_matched();
        assert_eq!(
            controller.host().navigations,
            vec![("100000001".to_string(), true)]
        );
    }

    #[test]
    fn master_matched_respects_mode_selection_and_empty_list() {
        let mut no_mode = controller();
        no_mode.list_mut().set_mode(ListMode::None);
        no_mode.on_master_matched();
        assert!(no_mode.host().navigations.is_empty());

        let mut selected = controller();
        selected.list_mut().select("/Suppliers('100000003')");
        selected.on_master_matched();
        assert!(selected.host().navigations.is_empty());

        let mut empty = MasterController::new(
            SupplierList::new(Vec::new()),
            RecordingHost::default(),
            Box::new(DefaultTexts::default()),
        );
        empty.on_master_matched();
        assert_eq!(
            empty.host().targets,
            vec![Target::DetailNoObjectsAvailable]
        );

        let mut failed = controller();
        failed.list_mut().mark_load_failed();
        failed.on_master_matched();
        assert!(failed.host().navigations.is_empty());
        assert!(failed.host().targets.is_empty());
    }

    #[test]
    fn update_finished_selects_item_to_select_or_first_item() {
        let mut controller = controller();
        controller.app_mut().item_to_select = Some("Suppliers('100000003')".to_string());
        controller.on_update_finished(3);
        assert_eq!(
            controller.host().navigations,
            vec![("100000003".to_string(), true)]
        );

        let mut fallback = self::controller();
        fallback.on_search(Some("panorama"), false);
        fallback.app_mut().item_to_select = Some("/Suppliers('100000003')".to_string());
        fallback.on_update_finished(1);
        assert_eq!(
            fallback.host().navigations,
            vec![("100000002".to_string(), true)]
        );

        let mut nothing = self::controller();
        nothing.on_search(Some("zzz"), false);
        nothing.app_mut().item_to_select = Some("/Suppliers('100000003')".to_string());
        nothing.on_update_finished(0);
        assert_eq!(
            nothing.host().targets,
            vec![Target::DetailNoObjectsAvailable]
        );
    }

    #[test]
    fn show_detail_encodes_supplier_id() {
        let mut controller = MasterController::new(
            SupplierList::new(vec![Supplier::new("A/B 1", "Slashy")]),
            RecordingHost::default(),
            Box::new(DefaultTexts::default()),
        );
        assert!(controller.show_detail("/Suppliers('A/B 1')"));
        assert_eq!(controller.host().navigations[0].0, "A%2FB%201");
    }

    #[test]
    fn path_with_slash_adds_missing_prefix() {
        assert_eq!(path_with_slash("Suppliers('1')"), "/Suppliers('1')");
        assert_eq!(path_with_slash("/Suppliers('1')"), "/Suppliers('1')");
    }

    #[tokio::test(start_paused = true)]
    async fn sync_reconciles_checked_suppliers_and_clears_busy() {
        let mut controller = controller();
        controller.list_mut().check(&SupplierId::new("100000002"));
        let engine = engine(&["100000001"]);
        let toasts = Toasts::default();

        let report = controller.on_sync(&engine, "jdoe", &toasts).await.unwrap();

        assert_eq!((report.registered, report.deleted), (1, 1));
        assert!(!controller.view().busy);
        assert_eq!(
            *engine.registry().requests.lock().unwrap(),
            vec![
                "LIST ESPM".to_string(),
                "DELETE \"100000001\"".to_string(),
                "REGISTER \"100000002\"".to_string(),
            ]
        );
        assert_eq!(
            *toasts.0.lock().unwrap(),
            vec![SYNC_SUCCESS_MESSAGE.to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn template_save_switches_template_before_syncing() {
        let mut controller = controller();
        let mut engine = engine(&[]);
        let toasts = Toasts::default();

        let dialog = controller.open_template_dialog();
        assert_eq!(dialog.fields[0].id, "TemplateID");
        assert!(controller.is_template_dialog_open());

        controller
            .on_template_save(&mut engine, " ESPM_V2 ", "jdoe", &toasts)
            .await
            .unwrap();

        assert!(!controller.is_template_dialog_open());
        assert_eq!(engine.settings().template_name, "ESPM_V2");
        assert_eq!(
            engine.registry().requests.lock().unwrap()[0],
            "LIST ESPM_V2"
        );
    }

    #[tokio::test]
    async fn template_save_rejects_overlong_id_without_syncing() {
        let mut controller = controller();
        let mut engine = engine(&[]);
        let toasts = Toasts::default();

        let result = controller
            .on_template_save(&mut engine, &"x".repeat(40), "jdoe", &toasts)
            .await;

        assert!(result.is_err());
        assert!(engine.registry().requests.lock().unwrap().is_empty());
        assert_eq!(engine.settings().template_name, "ESPM");
    }

    #[tokio::test]
    async fn delete_all_cards_goes_through_view_busy_flag() {
        let mut controller = controller();
        let engine = engine(&["100000001"]);
        let toasts = Toasts::default();

        controller
            .on_delete_all_cards(&engine, "jdoe", &toasts)
            .await
            .unwrap();

        assert!(!controller.view().busy);
        assert_eq!(
            *engine.registry().requests.lock().unwrap(),
            vec!["DELETEALL".to_string()]
        );
    }
}
