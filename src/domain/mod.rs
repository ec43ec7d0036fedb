//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    AccountConfigUpdate, ApiLogs, BulkSend, BulkSendOptions, InboxCountQuery, InboxQuery,
    LocalIds, MessageIds, OperatorRange, OutboxQuery, RecentOutboxQuery, SendByPostalCode,
    SendMessage, SendOptions, Toggle, VerifyLookup,
};
pub use response::{
    AccountConfig, AccountInfo, InboxCount, InboxEntry, LocalStatusEntry, MessageEntry,
    OutboxCount, PostalCodeCount, StatusEntry,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, ApiStatusCode, DeliveryStatus, KnownApiStatusCode, KnownDeliveryStatus, LocalId,
    MessageId, MessageText, MessageType, OneOrMany, PageSize, PhoneNumber, PostalCode, Receptor,
    Sender, TemplateName, UnixTimestamp, VerifyToken,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn receptor(raw: &str) -> Receptor {
        Receptor::new(raw).unwrap()
    }

    fn local_id(raw: &str) -> LocalId {
        LocalId::new(raw).unwrap()
    }

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn send_message_requires_receptors() {
        let err = SendMessage::new(
            Vec::new(),
            MessageText::new("hi").unwrap(),
            SendOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Empty {
                field: Receptor::FIELD
            }
        ));
    }

    #[test]
    fn send_message_rejects_local_id_count_mismatch() {
        let options = SendOptions {
            local_ids: Some(OneOrMany::Many(vec![local_id("a")])),
            ..Default::default()
        };
        let err = SendMessage::new(
            vec![receptor("09120000001"), receptor("09120000002")],
            MessageText::new("hi").unwrap(),
            options,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::LengthMismatch {
                field: LocalId::FIELD,
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn send_message_accepts_single_local_id_for_many_receptors() {
        let options = SendOptions {
            local_ids: Some(OneOrMany::One(local_id("batch-1"))),
            ..Default::default()
        };
        let request = SendMessage::new(
            vec![receptor("09120000001"), receptor("09120000002")],
            MessageText::new("hi").unwrap(),
            options,
        )
        .unwrap();
        assert_eq!(request.receptors().len(), 2);
    }

    #[test]
    fn bulk_send_requires_receptors() {
        let err = BulkSend::new(
            Vec::new(),
            OneOrMany::One(MessageText::new("hi").unwrap()),
            BulkSendOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn id_lists_must_not_be_empty() {
        assert!(MessageIds::new(Vec::new()).is_err());
        assert!(LocalIds::new(Vec::new()).is_err());
        assert_eq!(MessageIds::one(MessageId::new(7)).ids(), &[MessageId::new(7)]);
    }

    #[test]
    fn outbox_query_builder_sets_fields() {
        let query = OutboxQuery::since(UnixTimestamp::new(10))
            .until(UnixTimestamp::new(20))
            .sender(Sender::new("10004346").unwrap());
        assert_eq!(query.start.value(), 10);
        assert_eq!(query.end.map(UnixTimestamp::value), Some(20));
        assert_eq!(query.sender.as_ref().map(Sender::as_str), Some("10004346"));
    }

    #[test]
    fn account_config_enums_round_trip_wire_values() {
        for logs in [ApiLogs::JustFaults, ApiLogs::Enabled, ApiLogs::Disabled] {
            assert_eq!(ApiLogs::from_wire(logs.as_str()), Some(logs));
        }
        assert_eq!(Toggle::from_wire("enabled"), Some(Toggle::Enabled));
        assert_eq!(Toggle::from_wire("maybe"), None);
    }
}
