//! Backend API client
//!
//! Every call goes through [`ApiClient::request`], which always sends the
//! session cookie and a JSON content type. There is no retry and no timeout;
//! failures surface to the calling view as [`ApiError`].

use std::cell::RefCell;
use std::rc::Rc;

use absen_types::{
    response_status, AdminUser, ApiError, CacheKey, CheckAttendanceRequest,
    CheckAttendanceResponse, CreateUserRequest, DataPage, Endpoints, Envelope, HistoryResponse,
    LoginRequest, MeResponse, MessageResponse, ProgramFilter, RequestOptions, ResponseCache,
    Result, StatsData, StatsResponse, SyncResult, UpdateProfileRequest, UpdateProfileResponse,
    UsersResponse, HISTORY_PATH, STATS_PATH,
};
use futures::channel::oneshot;
use serde::de::DeserializeOwned;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ProgressEvent, XmlHttpRequest};

use crate::utils::clock;

#[derive(Clone)]
pub struct ApiClient {
    endpoints: Rc<Endpoints>,
    stats_cache: Rc<RefCell<ResponseCache<StatsData>>>,
    history_cache: Rc<RefCell<ResponseCache<HistoryResponse>>>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.endpoints, &other.endpoints)
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        log::info!("API base URL: {}", base_url);
        Self {
            endpoints: Rc::new(Endpoints::new(base_url)),
            stats_cache: Rc::new(RefCell::new(ResponseCache::default())),
            history_cache: Rc::new(RefCell::new(ResponseCache::default())),
        }
    }

    /// Send a credentialed request and decode the JSON reply.
    pub async fn request<T: DeserializeOwned>(&self, url: &str, options: RequestOptions) -> Result<T> {
        let method = options.method.as_str();
        log::debug!("{} {}", method, url);

        let (status, body) = send(url, &options).await.map_err(|e| {
            log::error!("{} {} failed: {}", method, url, e);
            e
        })?;

        serde_json::from_str(&body).map_err(|e| {
            log::error!("{} {} returned {} with an unreadable body: {}", method, url, status, e);
            ApiError::from(e)
        })
    }

    // Public

    /// Raw reply; the detail view decides how success, failure and empty
    /// results are presented.
    pub async fn check_attendance(&self, whatsapp: &str) -> Result<CheckAttendanceResponse> {
        let body = CheckAttendanceRequest {
            whatsapp: whatsapp.to_string(),
        };
        self.request(
            &self.endpoints.check_attendance(),
            RequestOptions::post().json(&body)?,
        )
        .await
    }

    // Auth

    pub async fn login(&self, username: &str, password: &str) -> Result<MessageResponse> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.request::<MessageResponse>(&self.endpoints.login(), RequestOptions::post().json(&body)?)
            .await?
            .into_result()
    }

    pub async fn logout(&self) -> Result<MessageResponse> {
        self.clear_caches();
        self.request::<MessageResponse>(&self.endpoints.logout(), RequestOptions::post())
            .await?
            .into_result()
    }

    /// The signed-in administrator, or an error when the session is gone.
    pub async fn me(&self) -> Result<AdminUser> {
        let resp = self
            .request::<MeResponse>(&self.endpoints.me(), RequestOptions::get())
            .await?
            .into_result()?;
        resp.user.ok_or(ApiError::Rejected(None))
    }

    pub async fn update_profile(&self, body: &UpdateProfileRequest) -> Result<UpdateProfileResponse> {
        self.request::<UpdateProfileResponse>(
            &self.endpoints.update_profile(),
            RequestOptions::put().json(body)?,
        )
        .await?
        .into_result()
    }

    pub async fn list_users(&self) -> Result<Vec<AdminUser>> {
        let resp = self
            .request::<UsersResponse>(&self.endpoints.users(), RequestOptions::get())
            .await?
            .into_result()?;
        Ok(resp.users)
    }

    pub async fn create_user(&self, body: &CreateUserRequest) -> Result<MessageResponse> {
        self.request::<MessageResponse>(&self.endpoints.users(), RequestOptions::post().json(body)?)
            .await?
            .into_result()
    }

    pub async fn delete_user(&self, id: &str) -> Result<MessageResponse> {
        self.request::<MessageResponse>(&self.endpoints.user(id), RequestOptions::delete())
            .await?
            .into_result()
    }

    // Admin

    /// Run the sync job for one month. Cached stats and history are dropped
    /// on success so the next read reflects the new data.
    pub async fn sync_month(&self, month: &str) -> Result<SyncResult> {
        let result = self
            .request::<SyncResult>(&self.endpoints.fetch_attendance(month), RequestOptions::post())
            .await?
            .into_result()?;
        log::info!(
            "Sync {}: fetched {}, inserted {}, updated {}, skipped {}, duplicates {}",
            month,
            result.stats.total_fetched,
            result.stats.inserted,
            result.stats.updated,
            result.skipped_records.len(),
            result.duplicate_records.len()
        );
        self.clear_caches();
        Ok(result)
    }

    pub async fn mentee_page(&self, program: &ProgramFilter, page: u32) -> Result<DataPage> {
        self.request::<DataPage>(
            &self.endpoints.data(program.query_value(), page),
            RequestOptions::get(),
        )
        .await?
        .into_result()
    }

    pub async fn stats(&self, program: Option<&str>) -> Result<StatsData> {
        let key = CacheKey::new(STATS_PATH).param("program", program);
        if let Some(hit) = self.stats_cache.borrow().get(&key, clock::now_ms()) {
            log::debug!("stats cache hit for {:?}", program);
            return Ok(hit);
        }

        let resp = self
            .request::<StatsResponse>(&self.endpoints.stats(program), RequestOptions::get())
            .await?
            .into_result()?;
        self.stats_cache
            .borrow_mut()
            .insert(key, resp.stats.clone(), clock::now_ms());
        Ok(resp.stats)
    }

    pub async fn history(&self, month: &str, program: Option<&str>) -> Result<HistoryResponse> {
        let key = CacheKey::new(HISTORY_PATH)
            .param("month", Some(month))
            .param("program", program);
        if let Some(hit) = self.history_cache.borrow().get(&key, clock::now_ms()) {
            log::debug!("history cache hit for {}", month);
            return Ok(hit);
        }

        let resp = self
            .request::<HistoryResponse>(
                &self.endpoints.history(Some(month), program),
                RequestOptions::get(),
            )
            .await?
            .into_result()?;
        self.history_cache
            .borrow_mut()
            .insert(key, resp.clone(), clock::now_ms());
        Ok(resp)
    }

    fn clear_caches(&self) {
        self.stats_cache.borrow_mut().invalidate_prefix(STATS_PATH);
        self.history_cache.borrow_mut().invalidate_prefix(HISTORY_PATH);
    }
}

/// Issue the request over `XmlHttpRequest` and wait for load or error.
async fn send(url: &str, options: &RequestOptions) -> Result<(u16, String)> {
    let xhr = XmlHttpRequest::new().map_err(js_error)?;
    xhr.open(options.method.as_str(), url).map_err(js_error)?;
    xhr.set_with_credentials(true);
    for (name, value) in options.headers() {
        xhr.set_request_header(&name, &value).map_err(js_error)?;
    }

    // `loadend` fires once after load, error or abort.
    let (sender, receiver) = oneshot::channel::<()>();
    let onloadend = Closure::once_into_js(move |_: ProgressEvent| {
        let _ = sender.send(());
    });
    xhr.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));

    xhr.send_with_opt_str(options.body.as_deref())
        .map_err(js_error)?;

    receiver
        .await
        .map_err(|_| ApiError::Transport("request abandoned".to_string()))?;

    let status = response_status(xhr.status().map_err(js_error)?)?;
    let body = xhr.response_text().map_err(js_error)?.unwrap_or_default();
    Ok((status, body))
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", e))
}
