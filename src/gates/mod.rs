//! Kubernetes feature gates derived from a cluster's reported version.
//!
//! Every behavior change is a row in one threshold table. A threshold is
//! *reached* when the cluster version is at or after it, and reaching a
//! threshold always means the new behavior is in effect. The public
//! questions below are answered from that single rule.

use crate::error::VersionParseError;
use crate::version::{self, Version};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

// ============================================================================
// Threshold table
// ============================================================================

/// A fixed release at which a Kubernetes behavior changes.
#[derive(Debug)]
pub struct Threshold {
    /// Stable name, e.g. `KubeV1240Alpha4`
    pub name: &'static str,
    /// What changes once a cluster reaches this release
    pub description: &'static str,
    version: LazyLock<Version>,
}

impl Threshold {
    /// Whether `version` is at or after this threshold.
    pub(crate) fn reached(&self, version: &Version) -> bool {
        *version >= *self.version
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.version, f)
    }
}

/// 1.24.0-alpha.4: secret-based service account tokens are no longer
/// auto-generated.
pub static KUBE_V1240_ALPHA4: Threshold = Threshold {
    name: "KubeV1240Alpha4",
    description: "legacy secret-based service account tokens are no longer auto-generated",
    version: LazyLock::new(|| Version::with_pre_release(1, 24, 0, "alpha.4")),
};

/// 1.17.0-beta.2: `discovery.k8s.io/v1beta1` EndpointSlice is served.
pub static KUBE_V1170_BETA2: Threshold = Threshold {
    name: "KubeV1170Beta2",
    description: "EndpointSlice discovery.k8s.io/v1beta1 is available",
    version: LazyLock::new(|| Version::with_pre_release(1, 17, 0, "beta.2")),
};

/// 1.21.0-beta.1: `discovery.k8s.io/v1` EndpointSlice is served.
pub static KUBE_V1210_BETA1: Threshold = Threshold {
    name: "KubeV1210Beta1",
    description: "EndpointSlice discovery.k8s.io/v1 is available",
    version: LazyLock::new(|| Version::with_pre_release(1, 21, 0, "beta.1")),
};

static THRESHOLDS: [&Threshold; 3] = [&KUBE_V1240_ALPHA4, &KUBE_V1170_BETA2, &KUBE_V1210_BETA1];

/// All known thresholds, oldest table entry first.
pub fn thresholds() -> &'static [&'static Threshold] {
    &THRESHOLDS
}

// ============================================================================
// Features
// ============================================================================

/// A feature question that can be asked about a cluster version.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    /// Legacy secret-based service account tokens are still auto-generated
    SaTokenAutoGenerated,
    /// EndpointSlice `discovery.k8s.io/v1beta1` is available
    EndpointSliceV1beta1Promoted,
    /// EndpointSlice `discovery.k8s.io/v1` is available
    EndpointSliceV1Promoted,
}

impl Feature {
    pub const ALL: [Feature; 3] = [
        Feature::SaTokenAutoGenerated,
        Feature::EndpointSliceV1beta1Promoted,
        Feature::EndpointSliceV1Promoted,
    ];

    /// The threshold this feature is decided by.
    pub fn threshold(self) -> &'static Threshold {
        match self {
            Feature::SaTokenAutoGenerated => &KUBE_V1240_ALPHA4,
            Feature::EndpointSliceV1beta1Promoted => &KUBE_V1170_BETA2,
            Feature::EndpointSliceV1Promoted => &KUBE_V1210_BETA1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::SaTokenAutoGenerated => "sa-token-auto-generated",
            Feature::EndpointSliceV1beta1Promoted => "endpoint-slice-v1beta1-promoted",
            Feature::EndpointSliceV1Promoted => "endpoint-slice-v1-promoted",
        }
    }

    /// Parse `version` and answer this feature question for it.
    pub fn check(self, version: &str) -> Result<bool, VersionParseError> {
        let version = Version::parse(version)?;
        Ok(self.evaluate(&version))
    }

    pub(crate) fn evaluate(self, version: &Version) -> bool {
        let reached = self.threshold().reached(version);
        let enabled = match self {
            // Reaching 1.24.0-alpha.4 turns auto-generation off.
            Feature::SaTokenAutoGenerated => !reached,
            Feature::EndpointSliceV1beta1Promoted | Feature::EndpointSliceV1Promoted => reached,
        };
        log::trace!(
            "{} for {}: threshold {} reached={}, enabled={}",
            self.name(),
            version,
            self.threshold(),
            reached,
            enabled
        );
        enabled
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether legacy secret-based service account tokens are still
/// auto-generated, i.e. `version < 1.24.0-alpha.4`.
pub fn sa_token_auto_generated(version: &str) -> Result<bool, VersionParseError> {
    Feature::SaTokenAutoGenerated.check(version)
}

/// Whether EndpointSlice `discovery.k8s.io/v1beta1` is available, i.e.
/// `version >= 1.17.0-beta.2`.
pub fn endpoint_slice_v1beta1_promoted(version: &str) -> Result<bool, VersionParseError> {
    Feature::EndpointSliceV1beta1Promoted.check(version)
}

/// Whether EndpointSlice `discovery.k8s.io/v1` is available, i.e.
/// `version >= 1.21.0-beta.1`.
pub fn endpoint_slice_v1_promoted(version: &str) -> Result<bool, VersionParseError> {
    Feature::EndpointSliceV1Promoted.check(version)
}

// ============================================================================
// Reports
// ============================================================================

/// Answers to every feature question for one cluster version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureReport {
    /// Normalized version, `None` when the answers are assumed rather than
    /// derived from a reported version
    pub version: Option<String>,
    pub pre_release: bool,
    pub build_metadata: Option<String>,
    pub sa_token_auto_generated: bool,
    pub endpoint_slice_v1beta1_promoted: bool,
    pub endpoint_slice_v1_promoted: bool,
}

impl FeatureReport {
    fn for_version(version: &Version) -> Self {
        Self {
            version: Some(version.to_string()),
            pre_release: version.is_pre_release(),
            build_metadata: version.build_metadata().map(str::to_string),
            sa_token_auto_generated: Feature::SaTokenAutoGenerated.evaluate(version),
            endpoint_slice_v1beta1_promoted: Feature::EndpointSliceV1beta1Promoted
                .evaluate(version),
            endpoint_slice_v1_promoted: Feature::EndpointSliceV1Promoted.evaluate(version),
        }
    }

    /// Answers for a cluster older than every threshold.
    pub fn oldest_known() -> Self {
        Self {
            version: None,
            pre_release: false,
            build_metadata: None,
            ..Self::for_version(&version::OLDEST)
        }
    }

    pub fn get(&self, feature: Feature) -> bool {
        match feature {
            Feature::SaTokenAutoGenerated => self.sa_token_auto_generated,
            Feature::EndpointSliceV1beta1Promoted => self.endpoint_slice_v1beta1_promoted,
            Feature::EndpointSliceV1Promoted => self.endpoint_slice_v1_promoted,
        }
    }
}

/// Parse `version` once and answer every feature question.
pub fn evaluate(version: &str) -> Result<FeatureReport, VersionParseError> {
    let version = Version::parse(version)?;
    Ok(FeatureReport::for_version(&version))
}
