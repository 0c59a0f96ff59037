use async_trait::async_trait;

/// Rationale the awaiting-permission screen shows.
pub const PERMISSION_RATIONALE: &str = "Se necesita permiso para acceder a los contactos";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Platform permission collaborator for contact access.
#[async_trait]
pub trait Permissions: Send + Sync {
    /// Current status, without prompting.
    fn check(&self) -> PermissionStatus;

    /// Prompt the user and resolve to their decision.
    async fn request(&self) -> PermissionStatus;
}

/// Fixed answer. Stands in for the platform dialog in the demo and in tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticPermissions {
    granted: bool,
}

impl StaticPermissions {
    pub fn new(granted: bool) -> Self {
        Self { granted }
    }

    pub fn granted() -> Self {
        Self::new(true)
    }

    pub fn denied() -> Self {
        Self::new(false)
    }

    fn status(&self) -> PermissionStatus {
        if self.granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }
}

#[async_trait]
impl Permissions for StaticPermissions {
    fn check(&self) -> PermissionStatus {
        self.status()
    }

    async fn request(&self) -> PermissionStatus {
        self.status()
    }
}
