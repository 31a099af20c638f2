//! Factories that refuse kinds or answer with the wrong variant.

use std::sync::Arc;

use chat_client::application::conformance;
use chat_client::application::facades::{EmbedBuilder, MessageBuilder, RoleBuilder};
use chat_client::application::ApiContext;
use chat_client::domain::delegates::DelegateKind;
use chat_client::shared::error::DelegateError;

use crate::common::{context_with, server, session, MockTransport, PartialFactory, WrongVariantFactory};

#[test]
fn test_unsupported_kind_surfaces_through_facade() {
    let factory = Arc::new(PartialFactory::with_context_kinds(&[DelegateKind::EmbedBuilder]));
    let ctx = context_with(factory, MockTransport::new());

    assert!(EmbedBuilder::new(&ctx).is_ok());
    assert!(matches!(
        RoleBuilder::new(&ctx, server()),
        Err(DelegateError::UnsupportedKind(DelegateKind::RoleBuilder))
    ));
}

#[test]
fn test_context_needs_exception_logger() {
    let factory = Arc::new(PartialFactory::new(&[DelegateKind::ExceptionValidator]));
    let result = ApiContext::new(factory, Arc::new(MockTransport::new()), session());

    assert!(matches!(
        result,
        Err(DelegateError::UnsupportedKind(DelegateKind::ExceptionLogger))
    ));
}

#[test]
fn test_wrong_variant_is_a_kind_mismatch() {
    let ctx = context_with(Arc::new(WrongVariantFactory::new()), MockTransport::new());

    assert!(matches!(
        MessageBuilder::new(&ctx),
        Err(DelegateError::KindMismatch {
            expected: DelegateKind::MessageBuilder,
            actual: DelegateKind::EmbedBuilder,
        })
    ));
}

#[test]
fn test_probe_reports_partial_factory() {
    let factory = PartialFactory::with_context_kinds(&[DelegateKind::ButtonBuilder]);
    let report = conformance::probe(&factory).unwrap();

    assert_eq!(report.supported().len(), 3);
    assert_eq!(report.unsupported().len(), DelegateKind::ALL.len() - 3);
    assert!(matches!(
        report.ensure_conforming(),
        Err(DelegateError::UnsupportedKind(DelegateKind::ApiBuilder))
    ));
}

#[test]
fn test_probe_reports_wrong_variant() {
    let report = conformance::probe(&WrongVariantFactory::new()).unwrap();

    assert_eq!(
        report.mismatched(),
        vec![(DelegateKind::MessageBuilder, DelegateKind::EmbedBuilder)]
    );
    assert!(!report.is_conforming());
}
