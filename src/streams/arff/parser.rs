use crate::core::attributes::{AttributeRef, NominalAttribute, NumericAttribute};
use crate::core::instance_header::InstanceHeader;
use crate::utils::file_parsing::{split_csv_preserving_quotes, strip_surrounding_quotes};
use std::io::{BufRead, Error, ErrorKind, Seek};
use std::sync::Arc;

const DEFAULT_RELATION: &str = "unnamed_relation";

#[derive(Debug, PartialEq)]
pub(super) enum AttributeKind {
    Numeric,
    Nominal(Vec<String>),
}

pub(super) fn is_comment_or_empty(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t.starts_with('%')
}

fn invalid(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::InvalidData, message.into())
}

/// Strips a case-insensitive `@keyword` prefix, returning the rest of the line.
/// The keyword must be followed by whitespace or the end of the line.
fn directive<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let line = line.trim();
    let head = line.get(..keyword.len())?;
    let rest = &line[keyword.len()..];
    let separated = rest.is_empty() || rest.starts_with(char::is_whitespace);
    (separated && head.eq_ignore_ascii_case(keyword)).then(|| rest.trim())
}

/// Reads `@relation` and `@attribute` lines up to `@data`, leaving `reader`
/// at the first data row. Returns the header and the byte offset of that row.
/// The class column defaults to the last attribute.
pub(super) fn parse_header<R: BufRead + Seek>(
    reader: &mut R,
    class_index: Option<usize>,
) -> Result<(InstanceHeader, u64), Error> {
    let mut relation: Option<String> = None;
    let mut attributes: Vec<AttributeRef> = Vec::new();
    let mut line = String::new();

    let data_start_pos = loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(Error::new(
                ErrorKind::UnexpectedEof,
                "ARFF file ended before @data",
            ));
        }
        if is_comment_or_empty(&line) {
            continue;
        }

        if let Some(rest) = directive(&line, "@relation") {
            if relation.is_some() || !attributes.is_empty() {
                return Err(invalid("@relation must come once, before any @attribute"));
            }
            relation = Some(strip_surrounding_quotes(rest).to_string());
        } else if directive(&line, "@attribute").is_some() {
            let (name, kind) = parse_attribute_line(&line)?;
            let attribute: AttributeRef = match kind {
                AttributeKind::Numeric => Arc::new(NumericAttribute::new(name)),
                AttributeKind::Nominal(values) => Arc::new(NominalAttribute::from_values(name, values)),
            };
            attributes.push(attribute);
        } else if directive(&line, "@data").is_some() {
            break reader.stream_position()?;
        } else {
            return Err(invalid(format!(
                "Unsupported header directive: {}",
                line.trim()
            )));
        }
    };

    if attributes.is_empty() {
        return Err(invalid("ARFF header declares no attributes"));
    }
    let class_index = class_index.unwrap_or(attributes.len() - 1);
    if class_index >= attributes.len() {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!(
                "class index {class_index} out of range for {} attributes",
                attributes.len()
            ),
        ));
    }

    let header = InstanceHeader::new(
        relation.unwrap_or_else(|| DEFAULT_RELATION.to_string()),
        attributes,
        class_index,
    );
    Ok((header, data_start_pos))
}

pub(super) fn parse_attribute_line(line: &str) -> Result<(String, AttributeKind), Error> {
    let rest = directive(line, "@attribute").ok_or_else(|| invalid("Line is not '@attribute'"))?;

    let (name, declared_type) = match rest.chars().next() {
        Some(quote @ ('\'' | '"')) => {
            let end = rest[1..]
                .find(quote)
                .ok_or_else(|| invalid("Attribute name without closing quote marks"))?
                + 1;
            (rest[1..end].to_string(), rest[end + 1..].trim())
        }
        _ => match rest.split_once(char::is_whitespace) {
            Some((name, declared_type)) => (name.to_string(), declared_type.trim()),
            None => return Err(invalid("Attribute type is missing")),
        },
    };

    if declared_type.is_empty() {
        return Err(invalid("Attribute type is missing"));
    }

    let lowered = declared_type.to_ascii_lowercase();
    if ["numeric", "real", "integer"]
        .iter()
        .any(|kind| lowered.starts_with(kind))
    {
        return Ok((name, AttributeKind::Numeric));
    }

    if let Some(domain) = declared_type.strip_prefix('{') {
        let close = domain
            .rfind('}')
            .ok_or_else(|| invalid("Nominal set without closing '}'"))?;
        let values: Vec<String> = split_csv_preserving_quotes(&domain[..close])
            .iter()
            .map(|v| strip_surrounding_quotes(v).to_string())
            .filter(|v| !v.is_empty())
            .collect();
        if values.is_empty() {
            return Err(invalid("Empty nominal domain"));
        }
        return Ok((name, AttributeKind::Nominal(values)));
    }

    Err(invalid(format!("Attribute kind not supported: {declared_type}")))
}

/// Converts one data row to dense values: numeric cells as parsed, nominal
/// cells as the index of their label, `?` as NaN.
pub(super) fn parse_instance_values(header: &InstanceHeader, line: &str) -> Result<Vec<f64>, Error> {
    let cells = split_csv_preserving_quotes(line);
    if cells.len() != header.number_of_attributes() {
        return Err(invalid(format!(
            "Number of columns ({}) differs from number of attributes ({})",
            cells.len(),
            header.number_of_attributes()
        )));
    }

    cells
        .iter()
        .zip(&header.attributes)
        .enumerate()
        .map(|(idx, (cell, attribute))| {
            let cell = cell.trim();
            if cell == "?" {
                return Ok(f64::NAN);
            }
            let any = attribute.as_any();
            if any.is::<NumericAttribute>() {
                return cell.parse::<f64>().map_err(|_| {
                    invalid(format!("Invalid numeric value '{cell}' for attribute #{idx}"))
                });
            }
            if let Some(nominal) = any.downcast_ref::<NominalAttribute>() {
                let label = strip_surrounding_quotes(cell);
                return nominal
                    .index_of_value(label)
                    .map(|i| i as f64)
                    .ok_or_else(|| {
                        invalid(format!(
                            "Nominal value '{label}' not found in domain of attribute #{idx}"
                        ))
                    });
            }
            Err(invalid(format!("Unsupported attribute type at column #{idx}")))
        })
        .collect()
}
