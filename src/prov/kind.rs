//! The fixed PROV vocabulary: element and relation kinds with their
//! dispatch tables (type IRI, role-rename map).

/// Element kinds of PROV-JSON, in canonical emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Entity,
    Activity,
    Agent,
}

impl ElementKind {
    /// All element kinds in canonical order.
    pub const ALL: [ElementKind; 3] = [Self::Entity, Self::Activity, Self::Agent];

    /// Parse a PROV-JSON collection key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "entity" => Some(Self::Entity),
            "activity" => Some(Self::Activity),
            "agent" => Some(Self::Agent),
            _ => None,
        }
    }

    /// The PROV-JSON collection key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Activity => "activity",
            Self::Agent => "agent",
        }
    }

    /// The fixed PROV-O type IRI emitted as `@type`.
    pub fn type_iri(self) -> &'static str {
        match self {
            Self::Entity => "prov:Entity",
            Self::Activity => "prov:Activity",
            Self::Agent => "prov:Agent",
        }
    }
}

/// The 14 relation kinds of PROV-JSON, in canonical emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Generation,
    Usage,
    Communication,
    Start,
    End,
    Invalidation,
    Derivation,
    Attribution,
    Association,
    Delegation,
    Influence,
    Specialization,
    Alternate,
    Membership,
}

impl RelationKind {
    /// All relation kinds in canonical order.
    pub const ALL: [RelationKind; 14] = [
        Self::Generation,
        Self::Usage,
        Self::Communication,
        Self::Start,
        Self::End,
        Self::Invalidation,
        Self::Derivation,
        Self::Attribution,
        Self::Association,
        Self::Delegation,
        Self::Influence,
        Self::Specialization,
        Self::Alternate,
        Self::Membership,
    ];

    /// Parse a PROV-JSON collection key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "wasGeneratedBy" => Some(Self::Generation),
            "used" => Some(Self::Usage),
            "wasInformedBy" => Some(Self::Communication),
            "wasStartedBy" => Some(Self::Start),
            "wasEndedBy" => Some(Self::End),
            "wasInvalidatedBy" => Some(Self::Invalidation),
            "wasDerivedFrom" => Some(Self::Derivation),
            "wasAttributedTo" => Some(Self::Attribution),
            "wasAssociatedWith" => Some(Self::Association),
            "actedOnBehalfOf" => Some(Self::Delegation),
            "wasInfluencedBy" => Some(Self::Influence),
            "specializationOf" => Some(Self::Specialization),
            "alternateOf" => Some(Self::Alternate),
            "hadMember" => Some(Self::Membership),
            _ => None,
        }
    }

    /// The PROV-JSON collection key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Generation => "wasGeneratedBy",
            Self::Usage => "used",
            Self::Communication => "wasInformedBy",
            Self::Start => "wasStartedBy",
            Self::End => "wasEndedBy",
            Self::Invalidation => "wasInvalidatedBy",
            Self::Derivation => "wasDerivedFrom",
            Self::Attribution => "wasAttributedTo",
            Self::Association => "wasAssociatedWith",
            Self::Delegation => "actedOnBehalfOf",
            Self::Influence => "wasInfluencedBy",
            Self::Specialization => "specializationOf",
            Self::Alternate => "alternateOf",
            Self::Membership => "hadMember",
        }
    }

    /// The type IRI emitted as `@type`. The three kinds beyond PROV-O core
    /// use the `provext` extension namespace.
    pub fn type_iri(self) -> &'static str {
        match self {
            Self::Generation => "prov:Generation",
            Self::Usage => "prov:Usage",
            Self::Communication => "prov:Communication",
            Self::Start => "prov:Start",
            Self::End => "prov:End",
            Self::Invalidation => "prov:Invalidation",
            Self::Derivation => "prov:Derivation",
            Self::Attribution => "prov:Attribution",
            Self::Association => "prov:Association",
            Self::Delegation => "prov:Delegation",
            Self::Influence => "prov:Influence",
            Self::Specialization => "provext:Specialization",
            Self::Alternate => "provext:Alternate",
            Self::Membership => "provext:Membership",
        }
    }

    /// Role-rename table: qualified input role key → JSON-LD short key,
    /// in output emission order.
    pub fn roles(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Generation | Self::Usage | Self::Invalidation => &[
                ("prov:entity", "entity"),
                ("prov:activity", "activity"),
                ("prov:time", "time"),
            ],
            Self::Communication => &[
                ("prov:informed", "informed"),
                ("prov:informant", "informant"),
            ],
            Self::Start => &[
                ("prov:activity", "activity"),
                ("prov:trigger", "trigger"),
                ("prov:starter", "starter"),
                ("prov:time", "time"),
            ],
            Self::End => &[
                ("prov:activity", "activity"),
                ("prov:trigger", "trigger"),
                ("prov:ender", "ender"),
                ("prov:time", "time"),
            ],
            Self::Derivation => &[
                ("prov:generatedEntity", "generatedEntity"),
                ("prov:usedEntity", "usedEntity"),
                ("prov:activity", "activity"),
                ("prov:generation", "generation"),
                ("prov:usage", "usage"),
            ],
            Self::Attribution => &[("prov:entity", "entity"), ("prov:agent", "agent")],
            Self::Association => &[
                ("prov:activity", "activity"),
                ("prov:agent", "agent"),
                ("prov:plan", "plan"),
            ],
            Self::Delegation => &[
                ("prov:delegate", "delegate"),
                ("prov:responsible", "responsible"),
                ("prov:activity", "activity"),
            ],
            Self::Influence => &[
                ("prov:influencee", "influencee"),
                ("prov:influencer", "influencer"),
            ],
            Self::Specialization => &[
                ("prov:specificEntity", "specificEntity"),
                ("prov:generalEntity", "generalEntity"),
            ],
            Self::Alternate => &[
                ("prov:alternate1", "alternate1"),
                ("prov:alternate2", "alternate2"),
            ],
            Self::Membership => &[("prov:collection", "collection"), ("prov:entity", "entity")],
        }
    }
}
