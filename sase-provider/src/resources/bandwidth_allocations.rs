//! Bandwidth allocations
//!
//! These have no UUID. The ID is `name:spn_name_list`; an allocation is found
//! by listing with its name and matching the SPN set, and deleted by both.

use reqwest::Method;
use sase_core::id::{IdFormat, decode_string_slice, encode_string_slice};
use sase_core::provider::{
    BoxFuture, ErrorKind, ProviderError, ProviderResult, Resource,
};
use sase_core::resource::{Attributes, State};
use sase_core::schema::ResourceSchema;

use crate::client::service::to_body;
use crate::client::{ApiObject, ListInput, SaseClient, Service};
use crate::mapper;
use crate::models::BandwidthAllocation;
use crate::schemas::generated::bandwidth_allocations::bandwidth_allocations_config;
use crate::schemas::{self, SaseSchemaConfig};

const ALLOCATION_ID: IdFormat = IdFormat::new(&["name", "spn_name_list"]);

pub struct BandwidthAllocationResource {
    client: SaseClient,
    config: SaseSchemaConfig,
}

impl BandwidthAllocationResource {
    pub fn new(client: SaseClient) -> Self {
        Self {
            client,
            config: bandwidth_allocations_config(),
        }
    }

    fn fail(&self, err: impl Into<ProviderError>) -> ProviderError {
        err.into().for_resource(self.config.type_name)
    }

    fn to_state(&self, allocation: &BandwidthAllocation) -> ProviderResult<State> {
        let attributes =
            mapper::from_model(&self.schema(), allocation).map_err(|e| self.fail(e))?;
        let id = ALLOCATION_ID.encode(&attributes);
        Ok(State::existing(self.config.type_name, attributes).with_identifier(id))
    }

    /// Name and SPN list from the state's ID
    fn decode_id(&self, state: &State) -> ProviderResult<(String, Vec<String>)> {
        let id = state.id().ok_or_else(|| {
            self.fail(ProviderError::new(ErrorKind::InvalidId, "Resource has no ID"))
        })?;
        let tokens = ALLOCATION_ID.decode(id).map_err(|e| self.fail(e))?;
        let name = tokens.require("name").map_err(|e| self.fail(e))?;
        let spns = decode_string_slice(tokens.get("spn_name_list").unwrap_or_default());
        Ok((name.to_string(), spns))
    }

    fn request(&self, planned: &Attributes) -> ProviderResult<serde_json::Value> {
        let allocation: BandwidthAllocation =
            mapper::to_model(&self.schema(), planned).map_err(|e| self.fail(e))?;
        to_body(&allocation).map_err(|e| self.fail(e))
    }
}

impl Resource for BandwidthAllocationResource {
    fn type_name(&self) -> &'static str {
        self.config.type_name
    }

    fn schema(&self) -> ResourceSchema {
        self.config.schema.clone().attribute(schemas::id_attribute())
    }

    fn create<'a>(&'a self, planned: &'a Attributes) -> BoxFuture<'a, ProviderResult<State>> {
        Box::pin(async move {
            let body = self.request(planned)?;
            let created: BandwidthAllocation = self
                .client
                .execute(Method::POST, BandwidthAllocation::PATH, &[], Some(&body))
                .await
                .map_err(|e| self.fail(e))?;
            self.to_state(&created)
        })
    }

    fn read<'a>(&'a self, current: &'a State) -> BoxFuture<'a, ProviderResult<State>> {
        Box::pin(async move {
            let (name, spns) = self.decode_id(current)?;

            let input = ListInput {
                name: Some(name.clone()),
                ..Default::default()
            };
            let page = Service::<BandwidthAllocation>::new(&self.client)
                .list(&input)
                .await
                .map_err(|e| self.fail(e))?;
            let found = page
                .data
                .iter()
                .find(|a| a.name == name && same_spns(&a.spn_name_list, &spns));
            match found {
                Some(allocation) => self.to_state(allocation),
                None => Ok(State::not_found(self.config.type_name)),
            }
        })
    }

    fn update<'a>(
        &'a self,
        _prior: &'a State,
        planned: &'a Attributes,
    ) -> BoxFuture<'a, ProviderResult<State>> {
        Box::pin(async move {
            let body = self.request(planned)?;
            let updated: BandwidthAllocation = self
                .client
                .execute(Method::PUT, BandwidthAllocation::PATH, &[], Some(&body))
                .await
                .map_err(|e| self.fail(e))?;
            self.to_state(&updated)
        })
    }

    fn delete<'a>(&'a self, prior: &'a State) -> BoxFuture<'a, ProviderResult<()>> {
        Box::pin(async move {
            let (name, spns) = self.decode_id(prior)?;
            let query = [
                ("name", name),
                ("spn_name_list", encode_string_slice(&spns)),
            ];
            match self
                .client
                .execute_empty(Method::DELETE, BandwidthAllocation::PATH, &query, None)
                .await
            {
                Ok(()) => Ok(()),
                Err(e) if e.is_object_not_found() => Ok(()),
                Err(e) => Err(self.fail(e)),
            }
        })
    }

    fn import_state(&self, id: &str) -> ProviderResult<State> {
        let tokens = ALLOCATION_ID.decode(id).map_err(|e| self.fail(e))?;
        tokens.require("name").map_err(|e| self.fail(e))?;
        Ok(State::existing(self.config.type_name, Attributes::new()).with_identifier(id))
    }
}

/// SPN lists compare as sets; the API does not preserve order
fn same_spns(actual: &[String], expected: &[String]) -> bool {
    let mut actual: Vec<&str> = actual.iter().map(String::as_str).collect();
    let mut expected: Vec<&str> = expected.iter().map(String::as_str).collect();
    actual.sort_unstable();
    expected.sort_unstable();
    actual == expected
}
