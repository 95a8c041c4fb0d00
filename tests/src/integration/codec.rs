//! # Message Codec
//!
//! Messages arriving as `(type URL, JSON body)` decode into commands and
//! dispatch like typed ones.

#[cfg(test)]
mod tests {
    use crate::fixtures::{authority, Harness, Sp};
    use ledger_runtime::{message_types, Command, CommandResult, ErrorKind};
    use serde_json::json;
    use shared_types::LedgerEvent;

    #[test]
    fn test_json_message_dispatch() {
        let h = Harness::new();
        let sp = Sp::generate();

        let body = json!({
            "creator": sp.address.to_hex(),
            "sp_address": sp.address.to_hex(),
            "funding_address": sp.address.to_hex(),
            "description": { "moniker": "json-sp", "identity": "", "website": "", "security_contact": "", "details": "" },
            "deposit": 2_000,
        });
        let command =
            Command::decode("/storage.sp.MsgCreateStorageProvider", &body.to_string()).unwrap();
        assert_eq!(command.signers(), vec![sp.address.to_hex().as_str()]);

        let result = h.runtime.dispatch(command).unwrap();
        assert!(matches!(result, CommandResult::StorageProvider(p) if p.deposit == 2_000));
    }

    #[test]
    fn test_governance_params_update() {
        let h = Harness::new();
        let attesters = vec![h.attester.address.to_hex()];
        let update = |authority: String| {
            let body = json!({
                "authority": authority,
                "params": {
                    "challenge_window": 30,
                    "slash_penalty_bps": 250,
                    "attesters": attesters,
                },
            });
            Command::decode("/storage.challenge.MsgUpdateParams", &body.to_string()).unwrap()
        };

        let err = h
            .runtime
            .dispatch(update(Sp::generate().address.to_hex()))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);

        let result = h.runtime.dispatch(update(authority().to_hex())).unwrap();
        assert!(matches!(
            result,
            CommandResult::ChallengeParams(p) if p.challenge_window == 30
        ));
        assert!(matches!(
            h.store.events().last(),
            Some(LedgerEvent::ChallengeParamsUpdated {
                challenge_window: 30,
                slash_penalty_bps: 250
            })
        ));
    }

    #[test]
    fn test_every_registered_type_routes() {
        for message_type in message_types() {
            assert!(["sp", "storage", "challenge"].contains(&message_type.route));
        }
    }
}
