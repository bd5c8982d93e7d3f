use crate::field::Field;
use crate::solution::Solution;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Field {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.column(), self.row()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (column, row) = <(u16, u16)>::deserialize(deserializer)?;
        Ok(Field::new(column, row))
    }
}

impl Serialize for Solution {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows: Vec<String> = self.rows().iter().map(|r| r.to_string()).collect();

        // Board size first: "N:r0,r1,..."
        let full = format!("{}:{}", self.size(), rows.join(","));
        serializer.serialize_str(&full)
    }
}

impl<'de> Deserialize<'de> for Solution {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let (size_str, rows_str) = s
            .split_once(':')
            .ok_or_else(|| serde::de::Error::custom("Invalid solution format, expected N:rows"))?;
        let size: u16 = size_str
            .trim()
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("Invalid size: {}", e)))?;

        let rows = if rows_str.trim().is_empty() {
            Vec::new()
        } else {
            rows_str
                .split(',')
                .map(|r| {
                    r.trim()
                        .parse::<u16>()
                        .map_err(|e| serde::de::Error::custom(format!("Invalid row '{}': {}", r, e)))
                })
                .collect::<Result<Vec<u16>, D::Error>>()?
        };

        if rows.len() != size as usize {
            return Err(serde::de::Error::custom(format!(
                "Solution for size {} lists {} rows",
                size,
                rows.len()
            )));
        }

        Solution::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::find_solution;

    #[test]
    fn test_serialize_solution() {
        let solution = find_solution(4).expect("four queens fit");
        let json = serde_json::to_string(&solution).expect("serializable");
        assert_eq!(json, "\"4:1,3,0,2\"");

        let back: Solution = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, solution);
    }

    #[test]
    fn test_empty_solution() {
        let solution = find_solution(0).expect("empty board");
        let json = serde_json::to_string(&solution).expect("serializable");
        assert_eq!(json, "\"0:\"");
        let back: Solution = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, solution);
    }

    #[test]
    fn test_field_as_pair() {
        let json = serde_json::to_string(&Field::new(3, 7)).expect("serializable");
        assert_eq!(json, "[3,7]");
        let back: Field = serde_json::from_str("[2,5]").expect("deserializable");
        assert_eq!(back, Field::new(2, 5));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(serde_json::from_str::<Solution>("\"1,3,0,2\"").is_err());
        assert!(serde_json::from_str::<Solution>("\"x:1,3,0,2\"").is_err());
        assert!(serde_json::from_str::<Solution>("\"4:1,3,0\"").is_err());
        assert!(serde_json::from_str::<Solution>("\"4:1,3,a,2\"").is_err());
        // rows 0 and 2 share a diagonal
        let err = serde_json::from_str::<Solution>("\"4:0,3,2,1\"").expect_err("attacking queens");
        assert!(err.to_string().contains("share a diagonal"));
    }
}
