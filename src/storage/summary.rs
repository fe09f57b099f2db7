use serde::Serialize;
use serde_json::Value;

/// Aggregate over the whole record file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub total: Value,
}

enum Total {
    Integer(i128),
    Float(f64),
}

impl Total {
    fn add(self, amount: &serde_json::Number) -> Self {
        let as_int = amount
            .as_i64()
            .map(i128::from)
            .or_else(|| amount.as_u64().map(i128::from));

        match (self, as_int) {
            (Total::Integer(sum), Some(n)) => match sum.checked_add(n) {
                Some(next) => Total::Integer(next),
                None => Total::Float(sum as f64 + n as f64),
            },
            (Total::Integer(sum), None) => Total::Float(sum as f64 + amount.as_f64().unwrap_or(0.0)),
            (Total::Float(sum), _) => Total::Float(sum + amount.as_f64().unwrap_or(0.0)),
        }
    }

    fn into_value(self) -> Value {
        match self {
            Total::Integer(sum) => {
                if let Ok(n) = i64::try_from(sum) {
                    Value::from(n)
                } else if let Ok(n) = u64::try_from(sum) {
                    Value::from(n)
                } else {
                    Value::from(sum as f64)
                }
            }
            // non-finite sums serialize as null
            Total::Float(sum) => Value::from(sum),
        }
    }
}

impl Summary {
    /// Integer amounts sum to an integer; any float amount makes the total a float.
    /// Records without a numeric `amount` count as zero.
    pub fn from_records(records: &[Value]) -> Self {
        let total = records
            .iter()
            .filter_map(|r| match r.get("amount") {
                Some(Value::Number(n)) => Some(n),
                _ => None,
            })
            .fold(Total::Integer(0), Total::add);

        Summary {
            count: records.len(),
            total: total.into_value(),
        }
    }
}
