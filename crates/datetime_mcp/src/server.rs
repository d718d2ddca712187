use rmcp::{
    RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_handler, tool_router,
};

use crate::core::{
    error::{DateTimeServerError, McpResult},
    models::GetTimeInTimezoneRequest,
    provider::DateTimeProvider,
    utils::{
        COMMON_TIMEZONES, LIST_RESOURCE_URI, RESOURCE_SCHEME, decode_timezone_segment,
        render_timezone_list, timezone_resource_uri,
    },
};

/// Datetime MCP server exposing timezone queries as tools and resources
#[derive(Clone)]
pub struct DateTimeService {
    provider: DateTimeProvider,
    tool_router: ToolRouter<DateTimeService>,
}

impl DateTimeService {
    pub fn new() -> Self {
        Self {
            provider: DateTimeProvider::new(),
            tool_router: Self::tool_router(),
        }
    }

    fn create_resource_text(&self, uri: &str, name: &str) -> Resource {
        RawResource::new(uri, name.to_string()).no_annotation()
    }

    fn generate_timezone_list_content(&self) -> String {
        render_timezone_list(&self.provider.list_timezones())
    }

    fn generate_time_content(&self, timezone: &str) -> String {
        format!(
            "Current time in {}: {}",
            timezone,
            self.provider.format_now(timezone)
        )
    }

    /// Resolve a `datetime://` URI to its textual content
    fn read_resource_content(&self, uri: &str) -> McpResult<String> {
        if uri == LIST_RESOURCE_URI {
            return Ok(self.generate_timezone_list_content());
        }

        let Some(segment) = uri.strip_prefix(RESOURCE_SCHEME) else {
            return Err(DateTimeServerError::ResourceNotFound {
                uri: uri.to_string(),
            }
            .into());
        };

        let timezone =
            decode_timezone_segment(segment).ok_or_else(|| DateTimeServerError::InvalidTimezone {
                timezone: segment.to_string(),
            })?;
        if !self.provider.is_valid_timezone(&timezone) {
            return Err(DateTimeServerError::InvalidTimezone { timezone }.into());
        }

        Ok(self.generate_time_content(&timezone))
    }
}

impl Default for DateTimeService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl DateTimeService {
    #[tool(
        name = "get-current-time",
        description = "Get the current time in the server's local timezone"
    )]
    pub(crate) async fn get_current_time(&self) -> McpResult<CallToolResult> {
        let timezone = self.provider.current_timezone();
        Ok(CallToolResult::success(vec![Content::text(
            self.generate_time_content(&timezone),
        )]))
    }

    #[tool(
        name = "get-current-timezone",
        description = "Get the server's local IANA timezone name"
    )]
    pub(crate) async fn get_current_timezone(&self) -> McpResult<CallToolResult> {
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Current timezone: {}",
            self.provider.current_timezone()
        ))]))
    }

    #[tool(
        name = "get-time-in-timezone",
        description = "Get the current time in a specific IANA timezone"
    )]
    pub(crate) async fn get_time_in_timezone(
        &self,
        Parameters(req): Parameters<GetTimeInTimezoneRequest>,
    ) -> McpResult<CallToolResult> {
        if !self.provider.is_valid_timezone(&req.timezone) {
            return Ok(CallToolResult::error(vec![Content::text(format!(
                "Unknown timezone '{}'. Use the list-timezones tool to see all supported IANA timezone names.",
                req.timezone
            ))]));
        }
        Ok(CallToolResult::success(vec![Content::text(
            self.generate_time_content(&req.timezone),
        )]))
    }

    #[tool(
        name = "list-timezones",
        description = "List all supported IANA timezone names"
    )]
    pub(crate) async fn list_timezones(&self) -> McpResult<CallToolResult> {
        Ok(CallToolResult::success(vec![Content::text(
            self.generate_timezone_list_content(),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for DateTimeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(format!(
                "Datetime MCP Server for date/time and timezone queries. Tools: get-current-time, get-current-timezone, get-time-in-timezone, list-timezones. Local timezone: {}. Use IANA timezone names.",
                self.provider.current_timezone()
            )),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> McpResult<ListResourcesResult> {
        // One entry per curated zone keeps client-side browsing manageable;
        // the full set is still reachable through the template.
        let mut resources = vec![self.create_resource_text(LIST_RESOURCE_URI, "timezone-list")];
        resources.extend(
            COMMON_TIMEZONES
                .iter()
                .map(|tz| self.create_resource_text(&timezone_resource_uri(tz), tz)),
        );

        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _: RequestContext<RoleServer>,
    ) -> McpResult<ReadResourceResult> {
        let content = self.read_resource_content(&uri)?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(content, uri)],
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> McpResult<ListResourceTemplatesResult> {
        Ok(ListResourceTemplatesResult {
            next_cursor: None,
            resource_templates: vec![
                RawResourceTemplate {
                    uri_template: "datetime://{timezone}".to_string(),
                    name: "timezone-current-time".to_string(),
                    title: None,
                    description: Some(
                        "Current time in the given IANA timezone (percent-encoded)".to_string(),
                    ),
                    mime_type: Some("text/plain".to_string()),
                }
                .no_annotation(),
            ],
        })
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<InitializeResult> {
        tracing::info!("Datetime MCP Server initialized successfully");
        Ok(self.get_info())
    }
}
