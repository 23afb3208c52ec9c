use crate::parse::operation::{Operation, PathItem};
use crate::parse::spec::ApiDocument;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    /// Every method the generator understands, in emission order.
    ///
    /// Within one path, descriptors follow this order regardless of the key
    /// order in the source document.
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    /// Lowercase name, as used for the Playwright request call.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
        }
    }

    /// Uppercase name, as used in test titles.
    pub fn as_upper(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

/// One (path, method) endpoint drawn from the document.
#[derive(Debug, Clone, Copy)]
pub struct OperationRef<'a> {
    pub method: HttpMethod,
    pub path: &'a str,
    pub operation: &'a Operation,
}

fn method_operation(item: &PathItem, method: HttpMethod) -> Option<&Operation> {
    match method {
        HttpMethod::Get => item.get.as_ref(),
        HttpMethod::Post => item.post.as_ref(),
        HttpMethod::Put => item.put.as_ref(),
        HttpMethod::Patch => item.patch.as_ref(),
        HttpMethod::Delete => item.delete.as_ref(),
        HttpMethod::Head => item.head.as_ref(),
        HttpMethod::Options => item.options.as_ref(),
    }
}

/// Walk every operation in the document: paths in document order, methods in
/// [`HttpMethod::ALL`] order. Pure and restartable.
pub fn operations(doc: &ApiDocument) -> impl Iterator<Item = OperationRef<'_>> {
    doc.paths.iter().flat_map(|(path, item)| {
        HttpMethod::ALL.into_iter().filter_map(move |method| {
            method_operation(item, method).map(|operation| OperationRef {
                method,
                path: path.as_str(),
                operation,
            })
        })
    })
}
