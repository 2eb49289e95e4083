// API path constants and user-facing fallback messages

pub mod api_path {
    // Auth
    pub const ADMIN_LOGIN: &str = "/equusid/admin/login";

    // User
    pub const USER: &str = "/equusid/user";
    pub const USER_LIST: &str = "/equusid/user/list";
    pub const USER_UPDATE_ACCOUNT_INFO: &str = "/equusid/user/update-account-info";

    // Equine
    pub const EQUINE: &str = "/equusid/equine";
    pub const EQUINE_LIST_BY_OWNER: &str = "/equusid/equine/list-by-owner";

    // Health book
    pub const HEALTH_BOOK: &str = "/equusid/health-book";

    // Stable
    pub const STABLE: &str = "/equusid/stable";
    pub const STABLE_SEARCH: &str = "/equusid/stable/search";
    pub const STABLE_TYPES: &str = "/equusid/stable/types";
    pub const STABLE_EQUINES: &str = "/equusid/stable/get-equines-by-stable";
    pub const STABLE_MANAGERS: &str = "/equusid/stable/get-managers-by-stable";
    pub const STABLE_ASSIGN_MANAGERS: &str = "/equusid/stable/assign-managers";
    pub const STABLE_REMOVE_MANAGERS: &str = "/equusid/stable/remove-managers";
    pub const STABLE_CHANGE_OWNER: &str = "/equusid/stable/change-owner";

    // Travel
    pub const TRAVEL: &str = "/equusid/travel";
    pub const TRAVEL_CONFIRM_DESTINATION: &str = "/equusid/travel/confirm-destination";
    pub const TRAVEL_MARK_DONE: &str = "/equusid/travel/mark-done";
    pub const TRAVEL_CANCEL: &str = "/equusid/travel/cancel";

    // Breed
    pub const BREED_BIOTYPE: &str = "/breed-biotype";
}

pub mod messages {
    pub const LIST_FAILED: &str = "Error al cargar la lista";
    pub const GET_FAILED: &str = "Error al obtener el registro";
    pub const CREATE_FAILED: &str = "Error al crear el registro";
    pub const UPDATE_FAILED: &str = "Error al actualizar el registro";
    pub const REMOVE_FAILED: &str = "Error al eliminar el registro";
    pub const LOGIN_FAILED: &str = "Credenciales inválidas.";
    pub const ACTION_FAILED: &str = "Error al ejecutar la acción";
}

/// Number of users fetched when populating the owner selector
pub const OWNER_LOOKUP_SIZE: u32 = 100;
