mod health_check;
mod phantom_auth;
