mod crud;
mod dictionary;
