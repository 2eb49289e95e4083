// Common model types: response envelope, page, list query

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{ClientError, Result};

/// Error object carried by a `success:false` envelope.
///
/// The backend emits two shapes: `{message, type, codigo}` and the older
/// `{codigo, descripcion, tipo}`. Both are accepted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub codigo: Option<i64>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
}

impl ApiErrorBody {
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.descripcion.as_deref())
            .filter(|m| !m.trim().is_empty())
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref().or(self.tipo.as_deref())
    }
}

/// Envelope wrapping every backend response
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Unwrap the envelope into the payload or a [`ClientError::Request`]
    pub fn into_result(self, fallback: &str) -> Result<T> {
        if self.success {
            return match self.data {
                Some(data) => Ok(data),
                // Payload types such as `Option<_>` accept an absent data field
                None => Ok(serde_json::from_value(serde_json::Value::Null)?),
            };
        }

        let error = self.error.unwrap_or_default();
        Err(ClientError::Request {
            message: error
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
            kind: error.kind().map(str::to_string),
            code: error.codigo,
        })
    }
}

/// One server-paginated slice of a resource collection
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    /// Zero-based index of this page
    pub number: u32,
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_elements: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<bool>,
}

impl<T> Page<T> {
    pub fn empty(size: u32) -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size,
            number_of_elements: Some(0),
            first: Some(true),
            last: Some(true),
        }
    }

    /// Slice a complete collection into the requested page.
    ///
    /// Used for resources whose list endpoint returns a plain array.
    pub fn from_all(items: Vec<T>, number: u32, size: u32) -> Self {
        let size = size.max(1);
        let total_elements = items.len() as u64;
        let total_pages = total_elements.div_ceil(size as u64) as u32;
        let start = (number as usize).saturating_mul(size as usize);

        let content: Vec<T> = items.into_iter().skip(start).take(size as usize).collect();

        Self {
            number_of_elements: Some(content.len() as u32),
            first: Some(number == 0),
            last: Some(number.saturating_add(1) >= total_pages),
            content,
            total_elements,
            total_pages,
            number,
            size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }
}

/// Parameters of one `list` call
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub size: u32,
    pub sort: Option<String>,
    /// Extra key/value pairs forwarded verbatim as query parameters
    pub filters: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            ..Default::default()
        }
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Append every field of a serializable filter struct. `None` fields are
    /// expected to be skipped by the struct's serde attributes.
    pub fn with_filters<F: Serialize + ?Sized>(mut self, filters: &F) -> Result<Self> {
        let encoded = serde_urlencoded::to_string(filters)
            .map_err(|e| ClientError::InvalidConfig(format!("unencodable filters: {}", e)))?;
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(&encoded)
            .map_err(|e| ClientError::InvalidConfig(format!("unencodable filters: {}", e)))?;
        self.filters.extend(pairs);
        Ok(self)
    }

    /// Query pairs in wire order: page, size, sort, then filters
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        if let Some(sort) = &self.sort {
            pairs.push(("sort".to_string(), sort.clone()));
        }
        pairs.extend(self.filters.iter().cloned());
        pairs
    }
}
