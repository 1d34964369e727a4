mod authenticated_user;
