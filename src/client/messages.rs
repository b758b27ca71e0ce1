use std::sync::Arc;

use crate::domain::{
    ApiResponse, DeliveryReportsParams, ListMessagesParams, Msisdn, SendMessage, SendToContacts,
    SendToTags,
};
use crate::transport::{
    delivery_reports_query, list_messages_query, send_message_body, send_to_tags_body,
};

use super::{Dispatcher, ImError, RequestSpec};

/// Outcome of one recipient within a bulk send.
#[derive(Debug)]
pub struct RecipientOutcome {
    /// The recipient this outcome belongs to.
    pub msisdn: Msisdn,
    /// The envelope for this recipient's request, or the transport error
    /// that prevented a response.
    pub result: Result<ApiResponse, ImError>,
}

/// Aggregated result of [`Messages::send_to_contacts`].
///
/// A bulk send is not atomic: some recipients may succeed while others
/// fail, and nothing is rolled back. `successful` counts `ok` envelopes;
/// everything else (non-2xx envelopes and transport failures) counts as
/// `failed`.
#[derive(Debug)]
pub struct BulkSendReport {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub outcomes: Vec<RecipientOutcome>,
}

#[derive(Clone)]
/// Message sending and history operations.
pub struct Messages {
    dispatcher: Arc<Dispatcher>,
}

impl Messages {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// List sent and received messages, optionally filtered.
    pub async fn list(&self, params: &ListMessagesParams) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::get("messages").with_params(list_messages_query(params));
        self.dispatcher.request(spec).await
    }

    /// Send a message to a single contact.
    pub async fn send_to_contact(&self, message: &SendMessage) -> Result<ApiResponse, ImError> {
        let spec =
            RequestSpec::post("messages/send_to_contact").with_body(send_message_body(message));
        self.dispatcher.request(spec).await
    }

    /// Send the same message to several contacts, one request per recipient.
    ///
    /// Requests are issued sequentially and each carries its own signature.
    /// A failure for one recipient (an `ok = false` envelope or a transport
    /// error) does not stop the remaining sends; every outcome is recorded
    /// in the returned report.
    pub async fn send_to_contacts(&self, send: &SendToContacts) -> BulkSendReport {
        let mut outcomes = Vec::with_capacity(send.recipients().len());

        for msisdn in send.recipients() {
            let mut message = SendMessage::new(msisdn.clone(), send.message().clone());
            if let Some(id) = send.id() {
                message = message.with_id(id);
            }
            let result = self.send_to_contact(&message).await;
            outcomes.push(RecipientOutcome {
                msisdn: msisdn.clone(),
                result,
            });
        }

        let successful = outcomes
            .iter()
            .filter(|outcome| matches!(&outcome.result, Ok(response) if response.ok))
            .count();

        BulkSendReport {
            total: outcomes.len(),
            successful,
            failed: outcomes.len() - successful,
            outcomes,
        }
    }

    /// Send a message to every contact carrying one of the given tags.
    pub async fn send_to_tags(&self, send: &SendToTags) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::post("messages/send").with_body(send_to_tags_body(send));
        self.dispatcher.request(spec).await
    }

    /// List delivery reports, optionally filtered.
    pub async fn delivery_reports(
        &self,
        params: &DeliveryReportsParams,
    ) -> Result<ApiResponse, ImError> {
        let spec = RequestSpec::get("messages/delivery_reports")
            .with_params(delivery_reports_query(params));
        self.dispatcher.request(spec).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::client::HttpMethod;
    use crate::client::testkit::{
        FakeResponse, FakeTransport, assert_query_param, make_dispatcher, make_failing_dispatcher,
    };
    use crate::domain::{ApiDate, MessageText, TagName};

    use super::*;

    fn make_messages(transport: FakeTransport) -> Messages {
        Messages::new(make_dispatcher(transport))
    }

    #[tokio::test]
    async fn list_sends_the_range_filters() {
        let transport = FakeTransport::new(200, r#"{"items": []}"#);
        let messages = make_messages(transport.clone());

        let params = ListMessagesParams {
            start_date: Some(ApiDate::parse("2024-01-01").unwrap()),
            limit: Some(100),
            ..Default::default()
        };
        messages.list(&params).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url.path(), "/v1/messages");
        assert_query_param(&request, "start_date", "2024-01-01 00:00:00");
        assert_query_param(&request, "limit", "100");
    }

    #[tokio::test]
    async fn send_to_contact_posts_the_message_body() {
        let transport = FakeTransport::new(200, r#"{"message_id": "m-1"}"#);
        let messages = make_messages(transport.clone());

        let message = SendMessage::new(
            Msisdn::new("50212345678").unwrap(),
            MessageText::new("hello").unwrap(),
        )
        .with_id("order-42");
        let response = messages.send_to_contact(&message).await.unwrap();
        assert!(response.ok);

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url.path(), "/v1/messages/send_to_contact");
        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({ "msisdn": "50212345678", "message": "hello", "id": "order-42" })
        );
    }

    #[tokio::test]
    async fn bulk_send_issues_one_request_per_recipient() {
        let transport = FakeTransport::with_responses(vec![
            FakeResponse::new(200, r#"{"message_id": "m-1"}"#),
            FakeResponse::new(500, r#"{"message": "carrier unavailable"}"#),
        ]);
        let messages = make_messages(transport.clone());

        let send = SendToContacts::new(
            vec![
                Msisdn::new("50212345678").unwrap(),
                Msisdn::new("50287654321").unwrap(),
            ],
            MessageText::new("hello").unwrap(),
        )
        .unwrap();
        let report = messages.send_to_contacts(&send).await;

        assert_eq!(report.total, 2);
        assert_eq!(report.successful, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.outcomes[0].msisdn.as_str(), "50212345678");
        assert_eq!(report.outcomes[1].msisdn.as_str(), "50287654321");
        assert!(matches!(&report.outcomes[1].result, Ok(r) if !r.ok));

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        let first: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        let second: serde_json::Value =
            serde_json::from_str(requests[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(first["msisdn"], "50212345678");
        assert_eq!(second["msisdn"], "50287654321");
        assert_eq!(first["message"], "hello");
    }

    #[tokio::test]
    async fn bulk_send_keeps_going_after_a_transport_failure() {
        let messages = Messages::new(make_failing_dispatcher());

        let send = SendToContacts::new(
            vec![
                Msisdn::new("50212345678").unwrap(),
                Msisdn::new("50287654321").unwrap(),
            ],
            MessageText::new("hello").unwrap(),
        )
        .unwrap();
        let report = messages.send_to_contacts(&send).await;

        assert_eq!(report.total, 2);
        assert_eq!(report.successful, 0);
        assert_eq!(report.failed, 2);
        assert!(
            report
                .outcomes
                .iter()
                .all(|outcome| matches!(outcome.result, Err(ImError::Transport(_))))
        );
    }

    #[tokio::test]
    async fn send_to_tags_posts_to_the_broadcast_endpoint() {
        let transport = FakeTransport::new(200, "{}");
        let messages = make_messages(transport.clone());

        let send = SendToTags::new(
            vec![TagName::new("vip").unwrap()],
            MessageText::new("campaign").unwrap(),
        )
        .unwrap()
        .with_id("camp-7");
        messages.send_to_tags(&send).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url.path(), "/v1/messages/send");
        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({ "tags": ["vip"], "message": "campaign", "id": "camp-7" })
        );
    }

    #[tokio::test]
    async fn delivery_reports_targets_the_reports_endpoint() {
        let transport = FakeTransport::new(200, r#"{"items": []}"#);
        let messages = make_messages(transport.clone());

        let params = DeliveryReportsParams {
            limit: Some(10),
            ..Default::default()
        };
        messages.delivery_reports(&params).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url.path(), "/v1/messages/delivery_reports");
        assert_query_param(&request, "limit", "10");
    }
}
