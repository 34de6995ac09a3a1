pub mod invitations_service;
