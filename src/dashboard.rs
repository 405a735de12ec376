//! The dashboard application object.
//!
//! [`Dashboard`] wires the API client, state, surface, navigation and
//! notifier together and exposes every user interaction as a method.
//! Shared state sits behind std mutexes that are never held across an
//! `.await`; when both are needed, `state` is locked before `navigation`
//! or `surface`.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::actions::{DocumentAction, RowAction};
use crate::api::ApiClient;
use crate::config::DashboardConfig;
use crate::debounce::Debouncer;
use crate::errors::ClientError;
use crate::filter::{self, FilterControl};
use crate::loaders::{self, PageUpdate};
use crate::markup::el;
use crate::models::{ExtractedPo, NewOrderForm, Order, PoAttachment};
use crate::navigation::NavigationController;
use crate::notifications::{Notifier, ToastKind, ToastNotifier};
use crate::state::AppState;
use crate::surface::{Page, Slot, Surface};

pub const ORDER_CREATED: &str = "Order created successfully";
pub const ORDER_FAILED: &str = "Failed to create order";
pub const PO_EXTRACTED: &str = "PO data extracted successfully";
pub const QC_REPORT_MODAL: &str = "QC Report modal coming soon";
pub const BOM_FILES: &str = "BOM files feature coming soon";
pub const DISPATCH_DOCS: &str = "Dispatch docs feature coming soon";

/// Pulls order details out of a purchase-order file.
#[async_trait]
pub trait PoExtractor: Send + Sync {
    async fn extract(&self, attachment: &PoAttachment) -> Result<ExtractedPo, ClientError>;
}

/// Returns fixed sample values regardless of the file's content.
#[derive(Debug, Default, Clone, Copy)]
pub struct SamplePoExtractor;

#[async_trait]
impl PoExtractor for SamplePoExtractor {
    async fn extract(&self, _attachment: &PoAttachment) -> Result<ExtractedPo, ClientError> {
        Ok(ExtractedPo {
            customer_name: "Sample Customer Corp".to_string(),
            style: "Classic Athletic Shoe".to_string(),
            quantity: 2500,
            order_amount: Decimal::new(12_500_000, 2),
        })
    }
}

/// What happened to the data fetched by a load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum LoadOutcome {
    /// At least one slot was repainted.
    Applied,
    /// Every fetch failed; the page keeps its previous content.
    Unchanged,
    /// The navigation was superseded before the data arrived.
    Discarded,
}

#[derive(Clone, Debug)]
struct Settings {
    recent_orders_limit: usize,
    po_extraction_delay: Duration,
}

struct Inner {
    api: ApiClient,
    notifier: ToastNotifier,
    settings: Settings,
    state: Mutex<AppState>,
    surface: Mutex<Surface>,
    navigation: Mutex<NavigationController>,
    searches: HashMap<Slot, Debouncer<String>>,
    extractor: Arc<dyn PoExtractor>,
    extraction: Mutex<Option<JoinHandle<()>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl Inner {
    async fn run_load(&self, page: Page, token: &CancellationToken) -> LoadOutcome {
        let Some(update) = loaders::load(page, &self.api, token).await else {
            return LoadOutcome::Discarded;
        };
        self.apply(update, token)
    }

    fn apply(&self, update: PageUpdate, token: &CancellationToken) -> LoadOutcome {
        let mut state = lock(&self.state);
        // Navigation cancels under the state lock, so this check cannot race it.
        if token.is_cancelled() {
            info!(page = %update.page(), "discarding stale response");
            return LoadOutcome::Discarded;
        }
        let mut surface = lock(&self.surface);
        if update.apply(&mut state, &mut surface, self.settings.recent_orders_limit) > 0 {
            LoadOutcome::Applied
        } else {
            LoadOutcome::Unchanged
        }
    }

    fn apply_search(&self, table: Slot, term: &str) -> usize {
        let mut state = lock(&self.state);
        state.filter_mut(table).set_search(term);
        let mut surface = lock(&self.surface);
        loaders::reapply_filter(table, &state, &mut surface).unwrap_or(0)
    }

    fn cancel_extraction(&self) {
        if let Some(handle) = lock(&self.extraction).take() {
            handle.abort();
        }
    }
}

/// Cheaply cloneable handle to the running dashboard.
#[derive(Clone)]
pub struct Dashboard {
    inner: Arc<Inner>,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig) -> Result<Self, ClientError> {
        Self::with_extractor(config, Arc::new(SamplePoExtractor))
    }

    pub fn with_extractor(
        config: &DashboardConfig,
        extractor: Arc<dyn PoExtractor>,
    ) -> Result<Self, ClientError> {
        let notifier = ToastNotifier::new(config.toast_ttl());
        let api = ApiClient::from_config(config, notifier.clone())?;
        let settings = Settings {
            recent_orders_limit: config.recent_orders_limit as usize,
            po_extraction_delay: config.po_extraction_delay(),
        };
        let debounce = config.search_debounce();
        let navigation = NavigationController::new();
        let mut surface = Surface::new();
        surface.activate(navigation.current());

        let inner = Arc::new_cyclic(|weak: &Weak<Inner>| {
            let searches = [Slot::OrdersTbody, Slot::DocumentsTbody]
                .into_iter()
                .map(|table| {
                    let weak = weak.clone();
                    let debouncer = Debouncer::new(debounce, move |term: String| {
                        if let Some(inner) = weak.upgrade() {
                            inner.apply_search(table, &term);
                        }
                    });
                    (table, debouncer)
                })
                .collect();

            Inner {
                api,
                notifier,
                settings,
                state: Mutex::new(AppState::default()),
                surface: Mutex::new(surface),
                navigation: Mutex::new(navigation),
                searches,
                extractor,
                extraction: Mutex::new(None),
            }
        });

        Ok(Self { inner })
    }

    /// Initial load: shows the dashboard page.
    pub async fn start(&self) -> LoadOutcome {
        self.navigate_to_page(Page::Dashboard).await
    }

    /// Activates `page` and runs its loader.
    #[instrument(skip(self))]
    pub async fn navigate_to_page(&self, page: Page) -> LoadOutcome {
        let navigation = {
            let mut state = lock(&self.inner.state);
            let navigation = lock(&self.inner.navigation).begin(page);
            state.current_page = page;
            lock(&self.inner.surface).activate(page);
            navigation
        };
        info!(page = %page, epoch = navigation.epoch, "navigated");

        self.inner.run_load(page, &navigation.token).await
    }

    /// Navigates by `data-page` id; an unknown id leaves the view unchanged.
    pub async fn navigate_to(&self, page_id: &str) -> Result<LoadOutcome, ClientError> {
        let page = Page::parse(page_id).map_err(|err| {
            warn!(page_id, "ignoring navigation to unknown page");
            err
        })?;
        Ok(self.navigate_to_page(page).await)
    }

    /// Reloads `page` without navigating; results are dropped if the user
    /// navigates away first.
    pub async fn refresh(&self, page: Page) -> LoadOutcome {
        let token = lock(&self.inner.navigation).current_token();
        self.inner.run_load(page, &token).await
    }

    /// Debounced search input handler.
    pub fn search(&self, input_id: &str, term: &str) {
        let table = filter::search_target(input_id);
        if let Some(debouncer) = self.inner.searches.get(&table) {
            debouncer.call(term.to_string());
        }
    }

    /// Runs a search immediately. Returns the number of visible rows.
    pub fn search_now(&self, input_id: &str, term: &str) -> usize {
        let table = filter::search_target(input_id);
        if let Some(debouncer) = self.inner.searches.get(&table) {
            debouncer.cancel();
        }
        self.inner.apply_search(table, term)
    }

    /// Select filter change handler. Returns the number of visible rows.
    pub fn filter(&self, control_id: &str, value: &str) -> Result<usize, ClientError> {
        let control = FilterControl::from_id(control_id)?;
        let select = control.parse_value(value)?;
        let table = control.table();

        let mut state = lock(&self.inner.state);
        state.filter_mut(table).set_select(select);
        let mut surface = lock(&self.inner.surface);
        Ok(loaders::reapply_filter(table, &state, &mut surface).unwrap_or(0))
    }

    pub fn handle_row_action(
        &self,
        action_id: &str,
        row_id: &str,
    ) -> Result<RowAction, ClientError> {
        let action = RowAction::parse(action_id)?;
        info!(action = %action, row_id, "row action");
        self.inner
            .notifier
            .notify(action.toast_message(), ToastKind::Info);
        Ok(action)
    }

    pub async fn handle_document_action(
        &self,
        action_id: &str,
    ) -> Result<DocumentAction, ClientError> {
        let action = DocumentAction::parse(action_id)?;
        match action {
            DocumentAction::UploadPo => self.open_new_order_modal(),
            DocumentAction::BomFiles => {
                self.inner.notifier.notify(BOM_FILES, ToastKind::Info);
            }
            DocumentAction::QcReports => {
                self.navigate_to_page(Page::Quality).await;
            }
            DocumentAction::DispatchDocs => {
                self.inner.notifier.notify(DISPATCH_DOCS, ToastKind::Info);
            }
        }
        Ok(action)
    }

    pub fn open_new_qc_report_modal(&self) {
        self.inner.notifier.notify(QC_REPORT_MODAL, ToastKind::Info);
    }

    pub fn open_new_order_modal(&self) {
        lock(&self.inner.surface).modal_mut().open = true;
    }

    /// Hides the modal, resets the form and drops any pending PO extraction.
    pub fn close_new_order_modal(&self) {
        self.inner.cancel_extraction();
        lock(&self.inner.surface).modal_mut().close();
    }

    pub fn update_form(&self, edit: impl FnOnce(&mut NewOrderForm)) {
        edit(&mut lock(&self.inner.surface).modal_mut().form);
    }

    /// Attaches a PO file and schedules extraction into the form.
    pub fn select_po_file(&self, attachment: PoAttachment) {
        let size_mb = attachment.size_bytes() as f64 / 1024.0 / 1024.0;
        let info = el("div")
            .id("file-info")
            .child(el("i").class("fas fa-file-text"))
            .text(format!("Selected: {} ({:.1} MB)", attachment.file_name, size_mb));
        {
            let mut surface = lock(&self.inner.surface);
            let modal = surface.modal_mut();
            modal.form.po_file = Some(attachment.clone());
            modal.file_info = Some(info);
        }

        let weak = Arc::downgrade(&self.inner);
        let deadline = tokio::time::Instant::now() + self.inner.settings.po_extraction_delay;
        let extractor = self.inner.extractor.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let result = extractor.extract(&attachment).await;
            let Some(inner) = weak.upgrade() else {
                return;
            };
            match result {
                Ok(extracted) => {
                    lock(&inner.surface).modal_mut().form.apply_extraction(&extracted);
                    inner.notifier.notify(PO_EXTRACTED, ToastKind::Success);
                }
                Err(err) => {
                    warn!(error = %err, file = %attachment.file_name, "PO extraction failed");
                    inner.notifier.notify(&err.toast_message(), ToastKind::Error);
                }
            }
        });

        if let Some(previous) = lock(&self.inner.extraction).replace(task) {
            previous.abort();
        }
    }

    /// Submits the new-order form. On success the modal closes and the
    /// orders and dashboard data are reloaded.
    #[instrument(skip(self))]
    pub async fn submit_new_order(&self) -> Result<Option<Order>, ClientError> {
        let form = lock(&self.inner.surface).modal().form.clone();

        let result = match form.validate() {
            Ok(()) => self.inner.api.create_order(&form).await,
            Err(errors) => Err(ClientError::from(errors)),
        };

        match result {
            Ok(order) => {
                self.inner.notifier.notify(ORDER_CREATED, ToastKind::Success);
                self.close_new_order_modal();
                let token = lock(&self.inner.navigation).current_token();
                tokio::join!(
                    self.inner.run_load(Page::Orders, &token),
                    self.inner.run_load(Page::Dashboard, &token),
                );
                Ok(order)
            }
            Err(err) => {
                error!(error = %err, "order creation failed");
                self.inner.notifier.notify(ORDER_FAILED, ToastKind::Error);
                Err(err)
            }
        }
    }

    pub fn current_page(&self) -> Page {
        lock(&self.inner.navigation).current()
    }

    pub fn notifier(&self) -> &ToastNotifier {
        &self.inner.notifier
    }

    pub fn with_state<R>(&self, read: impl FnOnce(&AppState) -> R) -> R {
        read(&lock(&self.inner.state))
    }

    pub fn with_surface<R>(&self, read: impl FnOnce(&Surface) -> R) -> R {
        read(&lock(&self.inner.surface))
    }

    pub fn render_page(&self, page: Page) -> String {
        lock(&self.inner.surface).render_page(page)
    }
}
