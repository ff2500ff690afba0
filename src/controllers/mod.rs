mod account_controller;
mod community_controller;
mod favourites_controller;
mod preference_controller;
mod recipe_controller;
mod session_controller;

pub use account_controller::{
    delete_account, fetch_profile, login, logout, request_password_reset, share_recipe, sign_up,
    toggle_bookmark, update_profile, verify_otp,
};
pub use community_controller::community_feed;
pub use favourites_controller::{
    FAVORITE_RECIPES_KEY, RECIPE_PREFS, clear_favorite_recipes, get_favorite_recipe,
    get_favorite_recipes, is_recipe_favorited, remove_favorite_recipe, save_favorite_recipe,
};
pub use preference_controller::{
    clear_namespace, get_preference, list_namespace, remove_preference, set_preference,
};
pub use recipe_controller::{
    generate_recipe, identify_ingredients_from_image, identify_ingredients_from_text,
};
pub use session_controller::{
    AUTH_PREFS, clear_session, get_access_token, get_refresh_token, get_user_id,
    get_user_profile, require_user_id, save_login_details, save_user_data,
};
