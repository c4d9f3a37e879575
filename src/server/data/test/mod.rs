mod bird;
