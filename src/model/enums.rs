//! Enumerations carried by graph records.
//!
//! Records store these as raw `i32` tags, the way protobuf messages do, so a
//! document can carry tags this crate does not know about. Each enum offers a
//! name table indexed by tag; unknown tags resolve to the zero tag's name.

use std::fmt;

macro_rules! tagged_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $tag:literal => $display:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $tag, )+
        }

        impl $name {
            /// Every variant, in tag order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Numeric tag of this variant.
            #[must_use]
            pub const fn tag(self) -> i32 {
                self as i32
            }

            /// Variant for a numeric tag, if known.
            #[must_use]
            pub const fn from_tag(tag: i32) -> Option<Self> {
                match tag {
                    $( $tag => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Display name as it appears in documents and expressions.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $display, )+
                }
            }

            /// Variant for a display name, if known.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $display => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Display name for a raw tag, falling back to the zero tag.
            #[must_use]
            pub fn tag_name(tag: i32) -> &'static str {
                Self::from_tag(tag).unwrap_or_default().name()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

tagged_enum! {
    /// Kind of a graph vertex.
    pub enum NodeType {
        Package = 0 => "PACKAGE",
        File = 1 => "FILE",
    }
}

tagged_enum! {
    /// Relation type of an edge.
    pub enum EdgeType {
        Unknown = 0 => "UNKNOWN",
        Amends = 1 => "amends",
        Ancestor = 2 => "ancestor",
        BuildDependency = 3 => "buildDependency",
        BuildTool = 4 => "buildTool",
        Contains = 5 => "contains",
        ContainedBy = 6 => "contained_by",
        Copy = 7 => "copy",
        DataFile = 8 => "dataFile",
        DependencyManifest = 9 => "dependencyManifest",
        DependsOn = 10 => "dependsOn",
        DependencyOf = 11 => "dependencyOf",
        Descendant = 12 => "descendant",
        Describes = 13 => "describes",
        DescribedBy = 14 => "describedBy",
        DevDependency = 15 => "devDependency",
        DevTool = 16 => "devTool",
        DistributionArtifact = 17 => "distributionArtifact",
        Documentation = 18 => "documentation",
        DynamicLink = 19 => "dynamicLink",
        Example = 20 => "example",
        ExpandedFromArchive = 21 => "expandedFromArchive",
        FileAdded = 22 => "fileAdded",
        FileDeleted = 23 => "fileDeleted",
        FileModified = 24 => "fileModified",
        Generates = 25 => "generates",
        GeneratedFrom = 26 => "generatedFrom",
        Metafile = 27 => "metafile",
        OptionalComponent = 28 => "optionalComponent",
        OptionalDependency = 29 => "optionalDependency",
        Other = 30 => "other",
        Packages = 31 => "packages",
        Patch = 32 => "patch",
        Prerequisite = 33 => "prerequisite",
        PrerequisiteFor = 34 => "prerequisiteFor",
        ProvidedDependency = 35 => "providedDependency",
        RequirementFor = 36 => "requirementFor",
        RuntimeDependency = 37 => "runtimeDependency",
        SpecificationFor = 38 => "specificationFor",
        StaticLink = 39 => "staticLink",
        Test = 40 => "test",
        TestCase = 41 => "testCase",
        TestDependency = 42 => "testDependency",
        TestTool = 43 => "testTool",
        Variant = 44 => "variant",
    }
}

tagged_enum! {
    /// Algorithm of a content hash.
    pub enum HashAlgorithm {
        Unknown = 0 => "UNKNOWN",
        Md5 = 1 => "MD5",
        Sha1 = 2 => "SHA1",
        Sha256 = 3 => "SHA256",
        Sha384 = 4 => "SHA384",
        Sha512 = 5 => "SHA512",
        Sha3_256 = 6 => "SHA3_256",
        Sha3_384 = 7 => "SHA3_384",
        Sha3_512 = 8 => "SHA3_512",
        Blake2b256 = 9 => "BLAKE2B_256",
        Blake2b384 = 10 => "BLAKE2B_384",
        Blake2b512 = 11 => "BLAKE2B_512",
        Blake3 = 12 => "BLAKE3",
        Md2 = 13 => "MD2",
        Adler32 = 14 => "ADLER32",
        Md4 = 15 => "MD4",
        Md6 = 16 => "MD6",
        Sha224 = 17 => "SHA224",
    }
}

tagged_enum! {
    /// Scheme of a software identifier.
    pub enum SoftwareIdentifierType {
        Unknown = 0 => "UNKNOWN_IDENTIFIER_TYPE",
        Purl = 1 => "PURL",
        Cpe22 = 2 => "CPE22",
        Cpe23 = 3 => "CPE23",
        Gitoid = 4 => "GITOID",
    }
}

tagged_enum! {
    /// Primary purpose of a node.
    pub enum Purpose {
        Unknown = 0 => "UNKNOWN_PURPOSE",
        Application = 1 => "APPLICATION",
        Archive = 2 => "ARCHIVE",
        Bom = 3 => "BOM",
        Configuration = 4 => "CONFIGURATION",
        Container = 5 => "CONTAINER",
        Data = 6 => "DATA",
        Device = 7 => "DEVICE",
        DeviceDriver = 8 => "DEVICE_DRIVER",
        Documentation = 9 => "DOCUMENTATION",
        Evidence = 10 => "EVIDENCE",
        Executable = 11 => "EXECUTABLE",
        File = 12 => "FILE",
        Firmware = 13 => "FIRMWARE",
        Framework = 14 => "FRAMEWORK",
        Install = 15 => "INSTALL",
        Library = 16 => "LIBRARY",
        MachineLearningModel = 17 => "MACHINE_LEARNING_MODEL",
        Manifest = 18 => "MANIFEST",
        Model = 19 => "MODEL",
        Module = 20 => "MODULE",
        OperatingSystem = 21 => "OPERATING_SYSTEM",
        Other = 22 => "OTHER",
        Patch = 23 => "PATCH",
        Platform = 24 => "PLATFORM",
        Requirement = 25 => "REQUIREMENT",
        Source = 26 => "SOURCE",
        Specification = 27 => "SPECIFICATION",
        Test = 28 => "TEST",
    }
}

tagged_enum! {
    /// Kind of an external reference.
    pub enum ExternalReferenceType {
        Unknown = 0 => "UNKNOWN",
        Attestation = 1 => "ATTESTATION",
        Binary = 2 => "BINARY",
        Bom = 3 => "BOM",
        Bower = 4 => "BOWER",
        BuildMeta = 5 => "BUILD_META",
        BuildSystem = 6 => "BUILD_SYSTEM",
        CertificationReport = 7 => "CERTIFICATION_REPORT",
        Chat = 8 => "CHAT",
        CodifiedInfrastructure = 9 => "CODIFIED_INFRASTRUCTURE",
        ComponentAnalysisReport = 10 => "COMPONENT_ANALYSIS_REPORT",
        Configuration = 11 => "CONFIGURATION",
        DistributionIntake = 12 => "DISTRIBUTION_INTAKE",
        Documentation = 13 => "DOCUMENTATION",
        Download = 14 => "DOWNLOAD",
        DynamicAnalysisReport = 15 => "DYNAMIC_ANALYSIS_REPORT",
        EolNotice = 16 => "EOL_NOTICE",
        Evidence = 17 => "EVIDENCE",
        ExportControlAssessment = 18 => "EXPORT_CONTROL_ASSESSMENT",
        Funding = 19 => "FUNDING",
        IssueTracker = 20 => "ISSUE_TRACKER",
        License = 21 => "LICENSE",
        Log = 22 => "LOG",
        MailingList = 23 => "MAILING_LIST",
        MaturityReport = 24 => "MATURITY_REPORT",
        MavenCentral = 25 => "MAVEN_CENTRAL",
        Metrics = 26 => "METRICS",
        ModelCard = 27 => "MODEL_CARD",
        Npm = 28 => "NPM",
        Nuget = 29 => "NUGET",
        Other = 30 => "OTHER",
        Poam = 31 => "POAM",
        PrivacyAssessment = 32 => "PRIVACY_ASSESSMENT",
        ProductMetadata = 33 => "PRODUCT_METADATA",
        PurchaseOrder = 34 => "PURCHASE_ORDER",
        QualityAssessmentReport = 35 => "QUALITY_ASSESSMENT_REPORT",
        QualityMetrics = 36 => "QUALITY_METRICS",
        ReleaseHistory = 37 => "RELEASE_HISTORY",
        ReleaseNotes = 38 => "RELEASE_NOTES",
        RiskAssessment = 39 => "RISK_ASSESSMENT",
        RuntimeAnalysisReport = 40 => "RUNTIME_ANALYSIS_REPORT",
        SecureSoftwareAttestation = 41 => "SECURE_SOFTWARE_ATTESTATION",
        SecurityAdversaryModel = 42 => "SECURITY_ADVERSARY_MODEL",
        SecurityAdvisory = 43 => "SECURITY_ADVISORY",
        SecurityContact = 44 => "SECURITY_CONTACT",
        SecurityFix = 45 => "SECURITY_FIX",
        SecurityOther = 46 => "SECURITY_OTHER",
        SecurityPentestReport = 47 => "SECURITY_PENTEST_REPORT",
        SecurityPolicy = 48 => "SECURITY_POLICY",
        SecuritySwid = 49 => "SECURITY_SWID",
        SecurityThreatModel = 50 => "SECURITY_THREAT_MODEL",
        Social = 51 => "SOCIAL",
        SourceArtifact = 52 => "SOURCE_ARTIFACT",
        StaticAnalysisReport = 53 => "STATIC_ANALYSIS_REPORT",
        Support = 54 => "SUPPORT",
        Vcs = 55 => "VCS",
        VulnerabilityAssertion = 56 => "VULNERABILITY_ASSERTION",
        VulnerabilityDisclosureReport = 57 => "VULNERABILITY_DISCLOSURE_REPORT",
        VulnerabilityExploitabilityAssessment = 58 => "VULNERABILITY_EXPLOITABILITY_ASSESSMENT",
        Website = 59 => "WEBSITE",
    }
}
