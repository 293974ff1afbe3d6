use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::Transport;
use crate::errors::Result;
use crate::models::common::{ListParams, PaginatedList};

/// Uniform CRUD client over one backend collection.
///
/// Every entity screen consumes the same five operations; entity-specific
/// sub-routes live on thin wrappers around this type.
pub struct ResourceClient<T, I> {
    transport: Arc<Transport>,
    endpoint: &'static str,
    _marker: PhantomData<fn() -> (T, I)>,
}

impl<T, I> ResourceClient<T, I>
where
    T: DeserializeOwned,
    I: Serialize,
{
    pub(crate) fn new(transport: Arc<Transport>, endpoint: &'static str) -> Self {
        Self {
            transport,
            endpoint,
            _marker: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    pub(crate) fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }

    /// Fetch one page.
    ///
    /// Requests are not cancelled: when a caller fires overlapping
    /// list calls (rapid search/pagination), whichever response arrives
    /// last wins, exactly as in the original front-end.
    pub async fn find_all(&self, params: &ListParams) -> Result<PaginatedList<T>> {
        self.transport
            .get_list(self.endpoint, &params.to_query())
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<T> {
        self.transport
            .get_data(&format!("{}/{id}", self.endpoint), &[])
            .await
    }

    pub async fn create(&self, input: &I) -> Result<T> {
        self.transport.post_data(self.endpoint, input).await
    }

    /// Update sends the full form value, as the original screens do.
    pub async fn update(&self, id: i64, input: &I) -> Result<T> {
        self.transport
            .put_data(&format!("{}/{id}", self.endpoint), input)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.transport
            .delete_empty(&format!("{}/{id}", self.endpoint))
            .await
    }
}
