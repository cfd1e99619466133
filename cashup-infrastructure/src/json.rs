use cashup_application::{Ledger, LedgerEntry, LedgerEntryWithLine, LedgerParseError, LedgerParser};
use cashup_domain::{Money, Participant, Ratio, SplitPolicy};
use fxhash::FxHashSet;
use rust_decimal::Decimal;
use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use std::fmt;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonLedger {
    payments: NamedAmounts,
    #[serde(default)]
    split: Option<NamedAmounts>,
}

/// A `name -> number` object read entry by entry, so repeated keys survive
/// deserialization and can be reported.
#[derive(Debug)]
struct NamedAmounts(Vec<(String, Decimal)>);

impl<'de> Deserialize<'de> for NamedAmounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NamedAmountsVisitor;

        impl<'de> Visitor<'de> for NamedAmountsVisitor {
            type Value = NamedAmounts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping participant names to numbers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Decimal>()? {
                    entries.push(entry);
                }
                Ok(NamedAmounts(entries))
            }
        }

        deserializer.deserialize_map(NamedAmountsVisitor)
    }
}

impl NamedAmounts {
    /// Rejects a name given twice; `line` is the 1-based position of the repeat.
    fn ensure_unique(&self) -> Result<(), LedgerParseError> {
        let mut seen = FxHashSet::default();
        for (idx, (name, _)) in self.0.iter().enumerate() {
            if !seen.insert(name.as_str()) {
                return Err(LedgerParseError::DuplicateParticipant {
                    name: name.clone(),
                    line: idx + 1,
                });
            }
        }
        Ok(())
    }
}

/// Reads `{ "payments": {..}, "split": {..} }`. Without `split` the group
/// splits evenly.
///
/// Each payment becomes one expense entry; its `line` is the payment's
/// position in the object.
#[derive(Default)]
pub struct JsonLedgerParser;

impl LedgerParser for JsonLedgerParser {
    fn parse(&self, content: &str) -> Result<Ledger, LedgerParseError> {
        let raw: JsonLedger = serde_json::from_str(content)
            .map_err(|err| LedgerParseError::InvalidJson(err.to_string()))?;
        raw.payments.ensure_unique()?;
        if let Some(split) = &raw.split {
            split.ensure_unique()?;
        }

        let participants = raw
            .payments
            .0
            .iter()
            .map(|(name, _)| Participant::new(name))
            .collect();
        let split = match raw.split {
            None => SplitPolicy::Even,
            Some(ratios) => SplitPolicy::Ratios(
                ratios
                    .0
                    .into_iter()
                    .map(|(name, ratio)| (Participant::new(name), Ratio::from_decimal(ratio)))
                    .collect(),
            ),
        };
        let entries = raw
            .payments
            .0
            .into_iter()
            .enumerate()
            .map(|(idx, (name, amount))| LedgerEntryWithLine {
                line: idx + 1,
                entry: LedgerEntry::Expense {
                    participant: Participant::new(name),
                    amount: Money::from_decimal(amount),
                },
            })
            .collect();

        Ok(Ledger::new(participants, split, entries))
    }
}
