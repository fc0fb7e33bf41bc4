//! Input schemas for the bot model use cases.

use crate::bot_model::domain::PricingModel;
use crate::schema::{ObjectSchema, Schema, StringSchema};
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Operation tag reported to the validation-failed port.
pub const STORE_BOT_MODEL_OPERATION: &str = "storeBotModel";

static SLUG_PATTERN: LazyLock<Regex> = LazyLock::new(compile_slug_pattern);

#[expect(clippy::expect_used, reason = "literal pattern is known to compile")]
fn compile_slug_pattern() -> Regex {
    Regex::new("^[a-z0-9-]+$").expect("slug pattern compiles")
}

static STORE_BOT_MODEL_SCHEMA: LazyLock<ObjectSchema> = LazyLock::new(|| {
    bot_model_fields(
        niche_schema(),
        ObjectSchema::new()
            .required("platform", platform())
            .with_default("technologyStack", string_list(), json!([]))
            .with_default("integrationPoints", string_list(), json!([]))
            .optional("performanceMetrics", performance_metrics_schema())
            .with_default("securityFeatures", string_list(), json!([]))
            .with_default("compliance", string_list(), json!([]))
            .optional("estimatedDevelopmentTime", Schema::number().positive())
            .optional("maintenanceRequirements", Schema::string()),
    )
});

static SIMPLE_STORE_BOT_MODEL_SCHEMA: LazyLock<ObjectSchema> = LazyLock::new(|| {
    bot_model_fields(
        ObjectSchema::new()
            .required("name", niche_name())
            .required("slug", niche_slug()),
        ObjectSchema::new().required("platform", platform()),
    )
});

/// Returns the schema accepted by
/// [`StoreBotModelService::store`](super::services::StoreBotModelService::store).
#[must_use]
pub fn store_bot_model_schema() -> &'static ObjectSchema {
    &STORE_BOT_MODEL_SCHEMA
}

/// Returns the reduced schema accepted by
/// [`StoreBotModelService::store_simple`](super::services::StoreBotModelService::store_simple).
///
/// Niche and technical specification are cut down to their required
/// fields; everything else matches [`store_bot_model_schema`].
#[must_use]
pub fn simple_store_bot_model_schema() -> &'static ObjectSchema {
    &SIMPLE_STORE_BOT_MODEL_SCHEMA
}

fn bot_model_fields(niche: ObjectSchema, technical_specification: ObjectSchema) -> ObjectSchema {
    ObjectSchema::new()
        .required(
            "name",
            Schema::string().non_empty("Bot model name is required"),
        )
        .required(
            "description",
            Schema::string().non_empty("Description is required"),
        )
        .required("slug", slug("Slug must be lowercase with hyphens"))
        .required("niche", niche)
        .required("technicalSpecification", technical_specification)
        .optional("targetAudience", Schema::string())
        .with_default("keyFeatures", string_list(), json!([]))
        .with_default("useCases", string_list(), json!([]))
        .with_default(
            "pricingModel",
            Schema::one_of(PricingModel::ALL.map(PricingModel::as_str)),
            json!(PricingModel::default().as_str()),
        )
        .with_default("tags", string_list(), json!([]))
}

fn niche_schema() -> ObjectSchema {
    ObjectSchema::new()
        .required("name", niche_name())
        .required("slug", niche_slug())
        .optional("description", Schema::string())
        .optional("targetAudience", Schema::string())
        .with_default("commonUseCases", string_list(), json!([]))
        .with_default("isActive", Schema::boolean(), json!(true))
        .optional("createdAt", Schema::string().datetime("Invalid datetime"))
}

fn performance_metrics_schema() -> ObjectSchema {
    ObjectSchema::new()
        .optional("responseTime", Schema::number().positive())
        .optional("uptime", Schema::number().min(0.0).max(100.0))
        .optional("scalability", Schema::one_of(["low", "medium", "high"]))
}

fn niche_name() -> StringSchema {
    Schema::string().non_empty("Niche name is required")
}

fn niche_slug() -> StringSchema {
    slug("Niche slug must be lowercase with hyphens")
}

fn platform() -> StringSchema {
    Schema::string().non_empty("Platform is required")
}

fn slug(message: &str) -> StringSchema {
    Schema::string().pattern(SLUG_PATTERN.clone(), message)
}

fn string_list() -> Schema {
    Schema::array(Schema::string())
}
