#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub check_id: String,
    pub code: String,
    pub message: String,
    pub location: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub rules_evaluated: u32,
    pub items_checked: u32,
    pub findings_total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}

/// One failing rule's slice of the combined failure body: its diagnostic
/// lines in declaration order plus the rule's configured closing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureBlock {
    pub lines: Vec<String>,
    pub message: Option<String>,
}
